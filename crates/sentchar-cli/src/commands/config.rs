use std::{
    fs::File,
    io::{
        BufReader,
        Write,
    },
};

use sentchar::{
    CharVocab,
    SCResult,
    SentcharError,
    model::{
        ModelDims,
        SequenceModelConfig,
    },
};

use crate::input_output::OutputArgs;

/// Args for the config command.
#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    /// JSON config file; missing fields take their defaults.
    #[clap(long, default_value = None)]
    config: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

/// A validated config and its shapes.
#[derive(serde::Serialize, Debug)]
struct ConfigReport {
    config: SequenceModelConfig,
    dims: ModelDims,
}

impl ConfigArgs {
    /// Run the config command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config: SequenceModelConfig = match &self.config {
            Some(path) => {
                log::info!("loading config: {path}");
                let reader = BufReader::new(File::open(path)?);
                serde_json::from_reader(reader)
                    .map_err(|e| SentcharError::Parse(format!("{path}: {e}")))?
            }
            None => SequenceModelConfig::default(),
        };

        let report = build_report(config)?;

        let mut writer = self.output.open_writer()?;
        serde_json::to_writer_pretty(&mut writer, &report)?;
        writeln!(writer)?;
        writer.flush()?;

        Ok(())
    }
}

fn build_report(config: SequenceModelConfig) -> SCResult<ConfigReport> {
    let dims = ModelDims::new(CharVocab::shared().len(), &config)?;
    Ok(ConfigReport { config, dims })
}
