use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use facematch_core::detection::infrastructure::onnx_face_engine::{
    OnnxFaceEngine, DEFAULT_CONFIDENCE,
};
use facematch_core::gallery::builder::GalleryStrategy;
use facematch_core::gallery::classifier::Classification;
use facematch_core::media::infrastructure::image_file_reader::ImageFileReader;
use facematch_core::media::infrastructure::image_file_writer::JpegFileWriter;
use facematch_core::pipeline::crop_faces_use_case::CropFacesUseCase;
use facematch_core::pipeline::identify_use_case::IdentifyFaceUseCase;
use facematch_core::shared::constants::DEFAULT_MATCH_THRESHOLD;
use facematch_core::Error;

mod config;
use config::FileConfig;

/// Face identification and batch face cropping.
#[derive(Parser)]
#[command(name = "facematch")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Identify the person in an input image against a sample gallery.
    Compare(CompareArgs),
    /// Crop the detected face out of every image under a directory.
    Recognize(RecognizeArgs),
}

#[derive(Args)]
struct CompareArgs {
    /// Models directory path.
    #[arg(long, env = "COMPARE_MODELS_PATH")]
    models_path: Option<PathBuf>,

    /// Image samples path.
    #[arg(long, env = "COMPARE_SAMPLES_PATH")]
    samples_path: Option<PathBuf>,

    /// Input image name.
    #[arg(long, env = "COMPARE_INPUT_IMAGE_NAME")]
    input_image_name: Option<PathBuf>,

    /// Verified passport image name (switches to single-reference gallery mode).
    #[arg(long, env = "COMPARE_PASSPORT_IMAGE_NAME")]
    passport_image_name: Option<String>,

    /// Labels for passport faces in detection order (comma-separated).
    #[arg(long, env = "COMPARE_LABELS", value_delimiter = ',')]
    labels: Option<Vec<String>>,

    /// Face detection output path (accepted for compatibility, unused).
    #[arg(long, env = "COMPARE_OUTPUT_PATH")]
    output_path: Option<PathBuf>,

    /// Maximum descriptor distance for a match.
    #[arg(long, env = "COMPARE_THRESHOLD")]
    threshold: Option<f64>,

    /// Face detection confidence threshold.
    #[arg(long, env = "COMPARE_CONFIDENCE")]
    confidence: Option<f64>,

    /// Config file (optional).
    #[arg(long, env = "COMPARE_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct RecognizeArgs {
    /// Models directory path.
    #[arg(long, env = "RECOGNIZE_MODELS_PATH")]
    models_path: Option<PathBuf>,

    /// Image samples path.
    #[arg(long, env = "RECOGNIZE_SAMPLES_PATH")]
    samples_path: Option<PathBuf>,

    /// Face detection output path.
    #[arg(long, env = "RECOGNIZE_OUTPUT_PATH")]
    output_path: Option<PathBuf>,

    /// Face detection confidence threshold.
    #[arg(long, env = "RECOGNIZE_CONFIDENCE")]
    confidence: Option<f64>,

    /// Config file (optional).
    #[arg(long, env = "RECOGNIZE_CONFIG")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {
        Command::Compare(args) => run_compare(args),
        Command::Recognize(args) => run_recognize(args),
    }
}

fn run_compare(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let file = FileConfig::load(args.config.as_deref())?;
    let models = args
        .models_path
        .or(file.models_path)
        .ok_or("models-path is required")?;
    let samples = args
        .samples_path
        .or(file.samples_path)
        .ok_or("samples-path is required")?;
    let input = args
        .input_image_name
        .or(file.input_image_name)
        .ok_or("input-image-name is required")?;
    let threshold = args
        .threshold
        .or(file.threshold)
        .unwrap_or(DEFAULT_MATCH_THRESHOLD);
    let confidence = args
        .confidence
        .or(file.confidence)
        .unwrap_or(DEFAULT_CONFIDENCE);

    // output-path is accepted for interface compatibility only
    let _ = args.output_path;

    let strategy = match args.passport_image_name.or(file.passport_image_name) {
        Some(name) => GalleryStrategy::SingleReference {
            reference: samples.join(name),
            labels: args.labels.unwrap_or_default(),
        },
        None => GalleryStrategy::LabeledDirectory,
    };

    let engine = OnnxFaceEngine::load(&models, confidence)
        .map_err(|source| Error::EngineLoad { source })?;
    let mut use_case =
        IdentifyFaceUseCase::new(Box::new(ImageFileReader::new()), Box::new(engine), threshold);

    match use_case.execute(&samples, &strategy, &input)? {
        Classification::Matched { category, label } => {
            println!("OK. {label} {category}");
            Ok(())
        }
        Classification::NoMatch => Err("cannot classify input image".into()),
    }
}

fn run_recognize(args: RecognizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let file = FileConfig::load(args.config.as_deref())?;
    let models = args
        .models_path
        .or(file.models_path)
        .ok_or("models-path is required")?;
    let samples = args
        .samples_path
        .or(file.samples_path)
        .ok_or("samples-path is required")?;
    let output = args
        .output_path
        .or(file.output_path)
        .ok_or("output-path is required")?;
    let confidence = args
        .confidence
        .or(file.confidence)
        .unwrap_or(DEFAULT_CONFIDENCE);

    let engine = OnnxFaceEngine::load(&models, confidence)
        .map_err(|source| Error::EngineLoad { source })?;

    let progress: Box<dyn Fn(usize, usize) -> bool + Send> = Box::new(|current, total| {
        eprint!("\rProcessing image {current}/{total}");
        true
    });

    let mut use_case = CropFacesUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(JpegFileWriter::default()),
        Box::new(engine),
        Some(progress),
    );

    let written = use_case.execute(&samples, &output)?;
    eprintln!();
    log::debug!("finished with {written} crops");

    println!("OK");
    Ok(())
}
