use log::{debug, info};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tract_onnx::prelude::*;

use crate::error::{BurnoutError, Result};
use crate::models::{PredictionRequest, FEATURE_NAMES};
use crate::presenter::{BurnoutClass, CATEGORIES};

pub const FEATURE_COUNT: usize = FEATURE_NAMES.len();

/// Anything that turns the six-feature vector into a raw class index.
pub trait Classifier: Send + Sync {
    fn classify(&self, features: &[f32; FEATURE_COUNT]) -> Result<i64>;

    fn describe(&self) -> String {
        "classifier".to_string()
    }
}

pub struct OnnxClassifier {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>,
    path: PathBuf,
}

impl OnnxClassifier {
    pub fn load<P: AsRef<Path>>(model_path: P) -> Result<Self> {
        let path = model_path.as_ref().to_path_buf();
        let shown = path.display().to_string();

        if !path.is_file() {
            return Err(BurnoutError::artifact_load(shown, "fichier introuvable"));
        }

        let model = Self::build_plan(&path).map_err(|e| BurnoutError::artifact_load(&shown, e))?;
        info!("Modèle chargé depuis {}", shown);

        Ok(Self { model, path })
    }

    fn build_plan(
        path: &Path,
    ) -> TractResult<SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>> {
        tract_onnx::onnx()
            .model_for_path(path)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(1, FEATURE_COUNT)),
            )?
            .into_optimized()?
            .into_runnable()
    }

    fn run(&self, features: &[f32; FEATURE_COUNT]) -> TractResult<i64> {
        let input_tensor = Tensor::from_shape(&[1, FEATURE_COUNT], &features[..])?;
        let outputs = self.model.run(tvec!(input_tensor.into()))?;
        let first = outputs
            .first()
            .ok_or_else(|| anyhow::anyhow!("Aucune sortie du modèle"))?;

        decode_output(first)
    }
}

/// Tree ensembles export one integer label, neural nets one score per class.
/// Any other shape means the artifact does not match the expected classes.
fn decode_output(output: &Tensor) -> TractResult<i64> {
    let unexpected = || anyhow::anyhow!("forme de sortie inattendue: {:?}", output.shape());

    match output.datum_type() {
        DatumType::I64 | DatumType::I32 => {
            let labels = output.cast_to::<i64>()?;
            match labels.as_slice::<i64>()? {
                [label] => Ok(*label),
                _ => Err(unexpected()),
            }
        }
        _ => {
            let scores = output.cast_to::<f32>()?;
            let scores = scores.as_slice::<f32>()?;
            if scores.len() != CATEGORIES.len() {
                return Err(unexpected());
            }
            argmax(scores).ok_or_else(|| anyhow::anyhow!("Scores invalides: {:?}", scores))
        }
    }
}

impl Classifier for OnnxClassifier {
    fn classify(&self, features: &[f32; FEATURE_COUNT]) -> Result<i64> {
        self.run(features).map_err(BurnoutError::prediction)
    }

    fn describe(&self) -> String {
        format!("onnx:{}", self.path.display())
    }
}

/// Index of the highest score; NaN never wins.
pub fn argmax(scores: &[f32]) -> Option<i64> {
    scores
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.is_nan())
        .fold(None, |best: Option<(usize, f32)>, (i, &s)| match best {
            Some((_, top)) if top >= s => best,
            _ => Some((i, s)),
        })
        .map(|(i, _)| i as i64)
}

/// Read-only handle on the loaded classifier, cheap to clone into request handlers.
#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn Classifier>,
}

impl Predictor {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    pub fn load<P: AsRef<Path>>(model_path: P) -> Result<Self> {
        Ok(Self::new(Arc::new(OnnxClassifier::load(model_path)?)))
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<BurnoutClass> {
        let features = request.to_array();
        let index = self.classifier.classify(&features)?;
        debug!("Vecteur {:?} -> classe {}", features, index);
        BurnoutClass::from_index(index)
    }

    pub fn get_model_info(&self) -> ModelInfo {
        ModelInfo {
            input_shape: vec![1, FEATURE_COUNT],
            source: self.classifier.describe(),
            features: FEATURE_NAMES.to_vec(),
            classes: CATEGORIES.iter().map(|c| c.label).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct ModelInfo {
    pub input_shape: Vec<usize>,
    pub source: String,
    pub features: Vec<&'static str>,
    pub classes: Vec<&'static str>,
}
