pub mod crop_faces_use_case;
pub mod identify_use_case;
pub mod sample_walker;
