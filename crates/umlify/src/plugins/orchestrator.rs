//! Plugin orchestrator for coordinating the extraction pipeline
//!
//! The orchestrator manages the flow of data through all plugins:
//! Detector → Extractor → ClassModel → Generator → DiagramService

use anyhow::Result;
use tracing::{debug, info, span, trace, Level};

use crate::core::{
    DiagramService, Detector, ExtractionMode, Extractor, Generator, PipelineConfig, UmlError,
};
use crate::plugins::java::{ClassDetector, ClassModel, InterfaceDetector, JavaExtractor};
use crate::plugins::plantuml::{PlantUmlGenerator, PlantUmlServer};

/// Plugin orchestrator that coordinates the entire pipeline
///
/// Extraction and generation need nothing external. Building a diagram URL
/// needs a [`DiagramService`], which callers inject. Calls that name no mode
/// use class mode unless another fixed mode or auto detection is configured.
pub struct Orchestrator {
    detectors: Vec<Box<dyn Detector>>,
    class_extractor: JavaExtractor,
    interface_extractor: JavaExtractor,
    generator: PlantUmlGenerator,
    service: Option<Box<dyn DiagramService>>,
    mode: ExtractionMode,
    auto_detect: bool,
}

impl Orchestrator {
    /// Create an orchestrator with both mode detectors and no service
    pub fn new() -> Self {
        let mut orchestrator = Self {
            detectors: Vec::new(),
            class_extractor: JavaExtractor::class_mode(),
            interface_extractor: JavaExtractor::interface_mode(),
            generator: PlantUmlGenerator::new(),
            service: None,
            mode: ExtractionMode::Class,
            auto_detect: false,
        };
        orchestrator.register_detector(Box::new(ClassDetector::new()));
        orchestrator.register_detector(Box::new(InterfaceDetector::new()));
        orchestrator
    }

    /// Create an orchestrator wired to a PlantUML server from `config`
    pub fn from_config(config: &PipelineConfig) -> Self {
        let mut orchestrator =
            Self::new().with_service(Box::new(PlantUmlServer::new(config.server.clone())));
        orchestrator.mode = config.mode;
        orchestrator.auto_detect = config.auto_detect;
        orchestrator
    }

    /// Attach the service used by [`Orchestrator::diagram_url`]
    pub fn with_service(mut self, service: Box<dyn DiagramService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Use `mode` whenever a call does not name one
    pub fn with_mode(mut self, mode: ExtractionMode) -> Self {
        self.mode = mode;
        self.auto_detect = false;
        self
    }

    /// Detect the mode per document whenever a call does not name one
    pub fn with_auto_detect(mut self) -> Self {
        self.auto_detect = true;
        self
    }

    fn register_detector(&mut self, detector: Box<dyn Detector>) {
        trace!(mode = %detector.mode(), patterns = ?detector.patterns(), "Registered detector");
        self.detectors.push(detector);
    }

    pub fn has_service(&self) -> bool {
        self.service.is_some()
    }

    /// Recommend an extraction mode for `input`
    ///
    /// The most confident matching detector wins; with no match the
    /// document is treated as class source.
    pub fn detect_mode(&self, input: &str) -> ExtractionMode {
        let detect_span = span!(Level::INFO, "detect_mode", input_len = input.len());
        let _enter = detect_span.enter();

        let mut best: Option<(ExtractionMode, f64)> = None;
        for detector in &self.detectors {
            let confidence = detector.confidence(input);
            trace!(mode = %detector.mode(), confidence, "Checking detector");
            if !detector.detect(input) {
                continue;
            }
            if best.map_or(true, |(_, top)| confidence > top) {
                best = Some((detector.mode(), confidence));
            }
        }

        match best {
            Some((mode, confidence)) => {
                info!(%mode, confidence, "Detected extraction mode");
                mode
            }
            None => {
                debug!("No detector matched; defaulting to class mode");
                ExtractionMode::Class
            }
        }
    }

    /// Mode for one call: explicit, then detected if enabled, then configured
    pub fn resolve_mode(&self, input: &str, mode: Option<ExtractionMode>) -> ExtractionMode {
        match mode {
            Some(mode) => mode,
            None if self.auto_detect => self.detect_mode(input),
            None => self.mode,
        }
    }

    fn extractor(&self, mode: ExtractionMode) -> &JavaExtractor {
        match mode {
            ExtractionMode::Class => &self.class_extractor,
            ExtractionMode::Interface => &self.interface_extractor,
        }
    }

    /// Extract the structural model of `input`
    pub fn extract(&self, input: &str, mode: Option<ExtractionMode>) -> ClassModel {
        let mode = self.resolve_mode(input, mode);
        let extractor = self.extractor(mode);
        let mut model = ClassModel::new();
        if !extractor.can_extract(input) {
            debug!(%mode, "No type declarations found");
            return model;
        }
        extractor.extract_into(input, &mut model);
        model
    }

    /// Generate markup for an already extracted model
    pub fn generate(&self, model: &ClassModel) -> String {
        self.generator.generate(model)
    }

    /// Run extraction and generation
    pub fn process(&self, input: &str, mode: Option<ExtractionMode>) -> String {
        let process_span = span!(Level::INFO, "process", input_len = input.len());
        let _enter = process_span.enter();

        let model = self.extract(input, mode);
        debug!(types = model.len(), "Extraction completed");

        let markup = self.generate(&model);
        info!(output_len = markup.len(), "Pipeline completed successfully");
        markup
    }

    /// Build a URL under which the diagram for `markup` can be fetched
    pub fn markup_url(&self, markup: &str) -> Result<String> {
        let service = self.service.as_ref().ok_or(UmlError::MissingService)?;
        debug!(service = service.name(), "Requesting diagram URL");
        service.diagram_url(markup)
    }

    /// Run the full pipeline and return the rendered diagram URL
    pub fn diagram_url(&self, input: &str, mode: Option<ExtractionMode>) -> Result<String> {
        let url_span = span!(Level::INFO, "pipeline_url", input_len = input.len());
        let _enter = url_span.enter();

        if self.service.is_none() {
            return Err(UmlError::MissingService.into());
        }
        let markup = self.process(input, mode);
        self.markup_url(&markup)
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}
