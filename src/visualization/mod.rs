pub mod fieldsim_vis2d;
