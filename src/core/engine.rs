use crate::core::Pipeline;
use crate::domain::model::ColorPalette;
use crate::utils::error::Result;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub palettes: Vec<ColorPalette>,
    pub output_path: String,
}

pub struct PaletteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PaletteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<EngineOutput> {
        let started = Instant::now();

        tracing::info!("Extracting input...");
        let input = self.pipeline.extract().await?;
        tracing::debug!("Extract finished in {:?}", started.elapsed());

        let phase = Instant::now();
        let result = self.pipeline.transform(input).await?;
        tracing::info!(
            "Built {} palette(s) from {} sampled color(s) in {:?}",
            result.palettes.len(),
            result.sample_count,
            phase.elapsed()
        );

        let palettes = result.palettes.clone();
        let phase = Instant::now();
        let output_path = self.pipeline.load(result).await?;
        tracing::debug!("Load finished in {:?}", phase.elapsed());

        tracing::info!("Done in {:?}, output at {}", started.elapsed(), output_path);
        Ok(EngineOutput {
            palettes,
            output_path,
        })
    }
}
