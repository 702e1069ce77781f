use std::sync::mpsc;

use tracing::{debug, warn};

use milanko_core::client::DataClient;

use crate::convert::decode_chart;
use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the fetch worker thread. Returns the command sender.
///
/// All network reads and image decoding happen here; the UI thread only
/// drains results.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("milanko-fetch".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn fetch worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let client = DataClient::new();
    debug!("fetch worker started");

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::FetchStats {
                params,
                year,
                request_id,
            } => {
                let outcome = client.year_stats(&params, year);
                if let Err(ref err) = outcome {
                    warn!(request_id, year, %err, "statistics fetch failed");
                }
                send(
                    &tx,
                    &ctx,
                    WorkerResult::Stats {
                        request_id,
                        outcome,
                    },
                );
            }
            WorkerCommand::FetchImage { url } => {
                let result = client
                    .fetch_bytes(&url)
                    .map_err(anyhow::Error::from)
                    .and_then(|bytes| decode_chart(&bytes))
                    .map_err(|err| err.to_string());
                if let Err(ref message) = result {
                    warn!(%url, message, "image fetch failed");
                }
                send(&tx, &ctx, WorkerResult::Image { url, result });
            }
        }
    }

    debug!("fetch worker exiting");
}
