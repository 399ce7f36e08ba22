#![forbid(unsafe_code)]

use clap::Parser;
use color_eyre::eyre;
use tokio::sync::mpsc;
use upload_progress::cli::Cli;
use upload_progress::model::state::State;
use upload_progress::services::transport::SimulatedTransport;
use upload_progress::services::upload_runner::UploadRunner;
use upload_progress::settings::app_settings::load_settings;
use upload_progress::state_store::StateStore;
use upload_progress::termination::{create_termination, Interrupted};
use upload_progress::ui_manager::UiManager;
use upload_progress::utils::{initialize_logging, initialize_panic_handler};
use upload_progress::view::node::Node;
use upload_progress::view::options::RenderOptions;
use upload_progress::{init, view, UploadModel};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    initialize_logging()?;
    initialize_panic_handler()?;
    let args = Cli::parse();
    let settings = load_settings(args.config.clone())?;
    let progress_specs = args.progress_overrides().merge_over(settings.progress);

    let groups = args.upload_groups()?;
    let uploads: Vec<UploadModel> = groups
        .iter()
        .map(|group| init(group.iter().map(|s| s.descriptor.clone()).collect()))
        .collect();

    if args.dump_view {
        let options = RenderOptions {
            progress: Some(progress_specs.into()),
        };
        let trees: Vec<Node> = uploads.iter().map(|upload| view(&options, upload)).collect();
        println!("{}", serde_json::to_string_pretty(&trees)?);
        return Ok(());
    }
    if uploads.is_empty() {
        eprintln!("Nothing to upload, pass some files or a --manifest.");
        return Ok(());
    }

    let (terminator, mut interrupt_rx) = create_termination();
    let (state_store, state_rx) = StateStore::new();
    let (ui_manager, action_rx) = UiManager::new();
    let (upload_tx, upload_rx) = mpsc::unbounded_channel();

    let runner = UploadRunner::new(SimulatedTransport::new(settings.transfer.clone()), upload_tx);
    for (id, (group, upload)) in groups.into_iter().zip(uploads.iter()).enumerate() {
        runner.start(id, &upload.title, group).await;
    }
    tracing::info!("Started {} uploads", uploads.len());

    tokio::try_join!(
        state_store.main_loop(
            terminator,
            State::new(uploads, progress_specs),
            runner.registry(),
            action_rx,
            upload_rx,
            interrupt_rx.resubscribe(),
        ),
        ui_manager.main_loop(state_rx, interrupt_rx.resubscribe()),
    )?;

    if let Ok(reason) = interrupt_rx.recv().await {
        match reason {
            Interrupted::UserInt => tracing::info!("exited per user request"),
            Interrupted::OsSigInt => tracing::info!("exited because of an os sig int"),
        }
    } else {
        tracing::error!("exited because of an unexpected error");
    }

    Ok(())
}
