pub mod states;
pub mod vector;
pub mod params;
pub mod engine;
pub mod fields;
pub mod tracer;
pub mod seeding;
pub mod grid;
pub mod forces;
pub mod integrator;
pub mod scheduler;
pub mod scene;
pub mod scenario;
