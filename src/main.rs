use genstudio::logger::{self, LoggerConfig};
use genstudio::models::known_model;
use genstudio::{Config, FormKind, GenerationApi, GenerationClient, ImageUpload, Studio};
use std::env;
use std::process::ExitCode;
use std::sync::Arc;

const USAGE: &str = "usage:
  genstudio t2i <prompt> [model] [size]
  genstudio i2i <image> <prompt> [creative_strength] [control_strength]
  genstudio i2v <image>
  genstudio models";

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();
    if let Err(e) = logger::init_with_config(LoggerConfig::from_config(&config)) {
        eprintln!("{}", e);
    }

    if dotenv_loaded {
        log::info!(".env file loaded");
    } else {
        log::warn!("No .env file found, using system environment variables");
    }
    logger::log_config_info(&config);

    let args: Vec<String> = env::args().skip(1).collect();
    match run(config, &args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config, args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let client = GenerationClient::new(&config)?;

    let Some(command) = args.first() else {
        return Err(USAGE.into());
    };

    if command == "models" {
        let models = client.list_models(&config.api_key).await?;
        for id in models.ids() {
            match known_model(id) {
                Some((name, category)) => {
                    println!("{}\t{}\t{}", id, category.as_str(), name)
                }
                None => println!("{}", id),
            }
        }
        return Ok(());
    }

    let studio = Studio::new(&config, Arc::new(client));
    let form = match (command.as_str(), &args[1..]) {
        ("t2i", [prompt, rest @ ..]) => {
            studio.update(|state| {
                state.text_to_image.prompt = prompt.clone();
                if let Some(model) = rest.first() {
                    state.text_to_image.model = model.clone();
                }
                if let Some(size) = rest.get(1) {
                    state.text_to_image.size = size.clone();
                }
            });
            FormKind::TextToImage
        }
        ("i2i", [image, prompt, rest @ ..]) => {
            let upload = ImageUpload::from_path(image).await?;
            if let Some(creative) = rest.first() {
                studio.input_creative_strength(creative.as_str());
            }
            if let Some(control) = rest.get(1) {
                studio.input_control_strength(control.as_str());
            }
            studio.update(|state| {
                state.image_to_image.image = Some(upload);
                state.image_to_image.prompt = prompt.clone();
            });
            FormKind::ImageToImage
        }
        ("i2v", [image]) => {
            let upload = ImageUpload::from_path(image).await?;
            studio.update(|state| state.image_to_video.image = Some(upload));
            FormKind::ImageToVideo
        }
        _ => return Err(USAGE.into()),
    };

    studio.open_tab(form.tab_id());
    let report = studio.submit(form).await;
    println!("{}", report.output.to_html());
    Ok(())
}
