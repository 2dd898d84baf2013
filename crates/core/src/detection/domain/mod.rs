pub mod face_engine;
