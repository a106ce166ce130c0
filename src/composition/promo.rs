use crate::{
    audio::AudioManifest,
    composition::{
        timeline::{ActiveSequence, PromoTimings, TransitionSeries},
        transition::BlurDissolve,
    },
    config::PromoConfig,
    foundation::{
        core::{Canvas, Fps, FrameIndex},
        error::{PromoError, PromoResult},
    },
    scene::{
        Scene, SceneCtx, background::GlobalBackground, cta::CtaScene, hero::HeroScene,
        node::Node, showcase::ShowcaseScene, steps::StepsScene,
    },
};

/// File emitted alongside the frames.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Artifact {
    /// What the renderer should capture.
    pub kind: ArtifactKind,
    /// Output file name.
    pub filename: String,
}

/// Artifact content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Still of the rendered frame.
    Thumbnail,
}

impl Artifact {
    /// `thumbnail.jpeg` still.
    pub fn thumbnail() -> Self {
        Self {
            kind: ArtifactKind::Thumbnail,
            filename: "thumbnail.jpeg".to_owned(),
        }
    }
}

/// Web font the renderer must load before drawing.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FontRequest {
    /// Family name.
    pub family: String,
    /// Weights to load.
    pub weights: Vec<u16>,
    /// Unicode subsets to load.
    pub subsets: Vec<String>,
    /// Weight of text that does not set one.
    pub default_weight: u16,
}

impl FontRequest {
    /// Inter 400..800, latin.
    pub fn inter() -> Self {
        Self {
            family: "Inter".to_owned(),
            weights: vec![400, 500, 600, 700, 800],
            subsets: vec!["latin".to_owned()],
            default_weight: 500,
        }
    }
}

/// The full promo: four scenes in a blur-dissolve series over a persistent background, plus
/// audio cues.
pub struct Promo {
    fps: Fps,
    canvas: Canvas,
    timings: PromoTimings,
    series: TransitionSeries,
    scenes: Vec<Box<dyn Scene>>,
    background: GlobalBackground,
    dissolve: BlurDissolve,
    audio: AudioManifest,
    font: FontRequest,
}

impl std::fmt::Debug for Promo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Promo")
            .field("fps", &self.fps)
            .field("canvas", &self.canvas)
            .field("timings", &self.timings)
            .field(
                "scenes",
                &self.scenes.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

impl Promo {
    /// Build from a validated configuration.
    pub fn new(config: &PromoConfig) -> PromoResult<Self> {
        config.validate()?;
        let t = config.timings;
        let scenes: Vec<Box<dyn Scene>> = vec![
            Box::new(HeroScene::new(t.hero)),
            Box::new(StepsScene::new(t.steps)),
            Box::new(ShowcaseScene::new(t.showcase)?),
            Box::new(CtaScene::new(t.cta)),
        ];
        let durations: Vec<u64> = scenes.iter().map(|s| s.duration_frames()).collect();
        let series = TransitionSeries::uniform(&durations, t.transition)?;
        let audio = AudioManifest::for_series(&series, config.fps, &config.audio)?;

        tracing::debug!(
            total_frames = series.total_frames(),
            cues = audio.cues().len(),
            "built promo"
        );

        Ok(Self {
            fps: config.fps,
            canvas: config.canvas,
            timings: t,
            background: GlobalBackground::new(series.total_frames()),
            series,
            scenes,
            dissolve: config.dissolve,
            audio,
            font: FontRequest::inter(),
        })
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Configured lengths.
    pub fn timings(&self) -> PromoTimings {
        self.timings
    }

    /// Scene sequencing.
    pub fn series(&self) -> &TransitionSeries {
        &self.series
    }

    /// Scenes in playback order.
    pub fn scenes(&self) -> &[Box<dyn Scene>] {
        &self.scenes
    }

    /// Audio cues.
    pub fn audio(&self) -> &AudioManifest {
        &self.audio
    }

    /// Font the renderer must load.
    pub fn font(&self) -> &FontRequest {
        &self.font
    }

    /// Composition length in frames.
    pub fn total_frames(&self) -> u64 {
        self.series.total_frames()
    }

    /// Artifacts to capture at `frame`.
    pub fn artifacts_at(&self, frame: FrameIndex) -> Vec<Artifact> {
        if frame.0 == 0 {
            vec![Artifact::thumbnail()]
        } else {
            Vec::new()
        }
    }

    /// Sequences visible at `frame`.
    pub fn active_at(&self, frame: FrameIndex) -> impl Iterator<Item = ActiveSequence> + '_ {
        self.series.active_at(frame).into_iter()
    }

    /// Display tree at `frame`: background, then the active scenes with the dissolve applied.
    pub fn render(&self, frame: FrameIndex) -> PromoResult<Node> {
        if frame.0 >= self.total_frames() {
            return Err(PromoError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0,
                self.total_frames()
            )));
        }

        let global = SceneCtx {
            frame: frame.as_f64(),
            fps: self.fps,
            canvas: self.canvas,
        };
        let mut root = Node::group("promo")
            .at(0.0, 0.0)
            .size(global.width(), global.height())
            .child(self.background.render(&global)?);

        for active in self.series.active_at(frame) {
            let scene = self.scenes.get(active.index).ok_or_else(|| {
                PromoError::evaluation(format!("no scene for sequence {}", active.index))
            })?;
            let ctx = SceneCtx {
                frame: active.local_frame as f64,
                ..global
            };
            let node = scene.render(&ctx)?;
            root = root.child(self.dissolve.apply(node, active.presentation));
        }

        Ok(root)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/promo.rs"]
mod tests;
