pub mod onnx_face_engine;
