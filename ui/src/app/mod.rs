pub mod iris_classifier;

pub use iris_classifier::IrisClassifier;
