use milanko_core::error::MilankoError;
use milanko_core::params::ParameterSet;
use milanko_core::stats::TemperatureSample;

/// Commands sent from the UI thread to the fetch worker.
pub enum WorkerCommand {
    /// Read the statistics row for one (parameters, year) snapshot.
    /// `request_id` ties the eventual result back to this issuance.
    FetchStats {
        params: ParameterSet,
        year: u32,
        request_id: u64,
    },

    /// Download and decode one chart image.
    FetchImage { url: String },
}

/// Results sent from the fetch worker back to the UI thread.
pub enum WorkerResult {
    /// Statistics fetch finished. The UI discards this unless `request_id`
    /// matches the most recently issued fetch.
    Stats {
        request_id: u64,
        outcome: Result<TemperatureSample, MilankoError>,
    },

    /// Chart image fetch finished, decoded on the worker.
    Image {
        url: String,
        result: Result<egui::ColorImage, String>,
    },
}
