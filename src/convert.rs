//! Summarizer model conversion pipeline.
//!
//! One-shot flow that turns the pretrained summarizer into an on-device
//! package: load → wrap → trace → convert → save. The tracing engine and
//! the format converter are external collaborators (a Core ML toolchain on
//! the build host); they sit behind [`ConversionBackend`] so the pipeline's
//! sequencing and shape contract can be exercised without them.
//!
//! The declared model input:
//!
//! | Name        | Shape          | dtype |
//! |-------------|----------------|-------|
//! | `input_ids` | `[1, 1..=512]` | int32 |

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Pretrained model converted for on-device summarisation.
pub const SUMMARIZER_MODEL_ID: &str = "microsoft/phi-3-mini-4k-instruct";

/// Concrete text the model is traced on.
pub const EXAMPLE_TEXT: &str = "Hello";

/// Package written next to the invoking process.
pub const PACKAGE_NAME: &str = "LocalSummarizer.mlpackage";

/// Longest token sequence the converted model accepts.
pub const MAX_SEQ_LEN: usize = 512;

// ─────────────────────────────────────────────────────────────────────────────
// Shape contract
// ─────────────────────────────────────────────────────────────────────────────

/// Sequence-length contract declared to the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqLen {
    /// Exactly this many tokens.
    Fixed(usize),
    /// Any length in `min..=max`.
    Range { min: usize, max: usize },
}

impl SeqLen {
    fn admits(&self, len: usize) -> bool {
        match *self {
            SeqLen::Fixed(n) => len == n,
            SeqLen::Range { min, max } => (min..=max).contains(&len),
        }
    }
}

/// The single input tensor the package declares: batch × sequence of
/// 32-bit integer token ids.
#[derive(Debug, Clone)]
pub struct InputSpec {
    pub name: String,
    pub batch: usize,
    pub seq_len: SeqLen,
}

impl InputSpec {
    /// The summarizer's input: `input_ids`, batch 1, flexible sequence
    /// length 1..=512.
    pub fn summarizer_default() -> Self {
        Self {
            name: "input_ids".to_string(),
            batch: 1,
            seq_len: SeqLen::Range { min: 1, max: MAX_SEQ_LEN },
        }
    }
}

/// Hardware execution targets the converted package may use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ComputeUnits {
    /// No restriction: any available accelerator class.
    #[default]
    All,
    CpuOnly,
    CpuAndGpu,
    CpuAndNeuralEngine,
}

// ─────────────────────────────────────────────────────────────────────────────
// Collaborator seams
// ─────────────────────────────────────────────────────────────────────────────

/// Turns text into a token-id sequence.
pub trait TextEncoder {
    fn encode(&self, text: &str) -> Result<Vec<i32>>;
}

/// Raw forward-pass result: per-token prediction scores plus whatever
/// auxiliary tensors the model also returns (attention caches and the like).
pub struct ForwardOutput {
    pub logits: Vec<f32>,
    pub aux: Vec<Vec<f32>>,
}

/// A causal language model producing per-token prediction scores.
///
/// Loaders hand these out with weights in half precision and training-only
/// behaviors (dropout) disabled.
pub trait CausalLm {
    fn forward(&self, input_ids: &[i32]) -> Result<ForwardOutput>;
}

/// The callable surface the tracer records: token ids in, scores out.
pub trait ScoringModel {
    fn prediction_scores(&self, input_ids: &[i32]) -> Result<Vec<f32>>;
}

/// Forward-pass wrapper: adapts a [`CausalLm`] to [`ScoringModel`] by
/// discarding every auxiliary output. Pure adapter, no state.
pub struct LogitsWrapper<M>(pub M);

impl<M: CausalLm> ScoringModel for LogitsWrapper<M> {
    fn prediction_scores(&self, input_ids: &[i32]) -> Result<Vec<f32>> {
        Ok(self.0.forward(input_ids)?.logits)
    }
}

/// Resolves a model identifier into a tokenizer and a loaded model.
///
/// Fails the whole run when the identifier cannot be resolved or the
/// weights cannot be fetched; nothing is retried.
pub trait ModelLoader {
    type Encoder: TextEncoder;
    type Model: CausalLm;

    fn load(&self, model_id: &str) -> Result<(Self::Encoder, Self::Model)>;
}

/// An in-memory converted package, writable exactly once per run.
pub trait MlPackage {
    /// Persist the package at `path`, overwriting anything already there.
    /// No transactional guarantee: a crash mid-write leaves a partial
    /// artifact.
    fn save(&self, path: &Path) -> Result<()>;
}

/// The external tracing/conversion toolchain.
pub trait ConversionBackend {
    /// Opaque, immutable record of one forward computation. Produced once,
    /// consumed exactly once by [`convert`](ConversionBackend::convert).
    type Graph;
    type Package: MlPackage;

    /// Execute `model` once on `example` and record the computation.
    fn trace(&self, model: &dyn ScoringModel, example: &[i32]) -> Result<Self::Graph>;

    /// Translate the traced graph into the target package format under the
    /// declared input shape and compute-unit preference.
    fn convert(
        &self,
        graph: Self::Graph,
        input: &InputSpec,
        units: ComputeUnits,
    ) -> Result<Self::Package>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Pipeline
// ─────────────────────────────────────────────────────────────────────────────

/// Run the conversion pipeline end to end and return the output path.
///
/// The traced graph is only valid for shapes consistent with `input`; an
/// example that falls outside the declared contract is a fatal error before
/// conversion is even attempted.
pub fn convert_model<L, B>(
    loader: &L,
    backend: &B,
    model_id: &str,
    example_text: &str,
    input: &InputSpec,
    units: ComputeUnits,
    output: &Path,
) -> Result<PathBuf>
where
    L: ModelLoader,
    B: ConversionBackend,
{
    log::info!("Loading {model_id}");
    let (encoder, model) = loader
        .load(model_id)
        .with_context(|| format!("Cannot load model '{model_id}'"))?;
    let wrapped = LogitsWrapper(model);

    let example = encoder
        .encode(example_text)
        .with_context(|| format!("Cannot encode example text {example_text:?}"))?;
    if !input.seq_len.admits(example.len()) {
        bail!(
            "Example sequence length {} violates the declared shape {:?}",
            example.len(),
            input.seq_len
        );
    }

    log::info!("Tracing…");
    let graph = backend
        .trace(&wrapped, &example)
        .context("Tracing failed")?;

    log::info!("Converting to the target package format…");
    let package = backend
        .convert(graph, input, units)
        .context("Conversion failed")?;

    log::info!("Saving package to {}", output.display());
    package
        .save(output)
        .with_context(|| format!("Cannot save package: {}", output.display()))?;
    Ok(output.to_path_buf())
}

/// Convert the summarizer with its fixed run parameters: Phi-3 mini,
/// example `"Hello"`, flexible sequence length, no compute-unit
/// restriction, output `LocalSummarizer.mlpackage` in the working
/// directory.
pub fn convert_summarizer<L, B>(loader: &L, backend: &B) -> Result<PathBuf>
where
    L: ModelLoader,
    B: ConversionBackend,
{
    convert_model(
        loader,
        backend,
        SUMMARIZER_MODEL_ID,
        EXAMPLE_TEXT,
        &InputSpec::summarizer_default(),
        ComputeUnits::default(),
        Path::new(PACKAGE_NAME),
    )
}
