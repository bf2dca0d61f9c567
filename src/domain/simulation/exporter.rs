use std::fs::File;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use crate::domain::spectrum::analyzer::N_FEATURES;
use crate::domain::topology::NodeId;
use crate::error::Result;

/// Column order of the snapshot CSV, one row per (step, node).
const SNAPSHOT_HEADERS: [&str; 7] =
    ["time", "node", "mean_occupancy", "max_occupancy", "min_largest_free_block", "mean_fragmentation", "max_fragmentation"];

/// Messages sent from the simulation thread to the writer thread.
enum ExportMessage {
    Row { time: u64, node: NodeId, features: [f64; N_FEATURES] },
    Flush,
    Shutdown,
}

/// CSV sink for node feature snapshots, used to build offline training sets.
///
/// Writing happens on a dedicated background thread fed through a channel,
/// so the admission loop never blocks on disk. The simulator only produces
/// rows; nothing in a run reads them back.
pub struct SnapshotExporter {
    sender: mpsc::Sender<ExportMessage>,
    worker: Option<thread::JoinHandle<()>>,
}

impl SnapshotExporter {
    /// Creates the output file and spawns the writer thread.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(path)?;
        let (sender, receiver) = mpsc::channel();

        let worker = thread::spawn(move || {
            Self::worker_loop(receiver, file);
        });

        log::info!("Exporting node snapshots to '{}'", path.display());

        Ok(SnapshotExporter { sender, worker: Some(worker) })
    }

    /// The logic running in the background thread.
    fn worker_loop(receiver: mpsc::Receiver<ExportMessage>, file: File) {
        let mut writer = csv::Writer::from_writer(file);

        if let Err(e) = writer.write_record(SNAPSHOT_HEADERS) {
            log::error!("Snapshot export: failed to write header row: {}", e);
        }

        for message in receiver {
            match message {
                ExportMessage::Row { time, node, features } => {
                    let mut row: Vec<String> = vec![time.to_string(), node.to_string()];
                    row.extend(features.iter().map(|value| format!("{:.4}", value)));

                    if let Err(e) = writer.write_record(&row) {
                        log::error!("Snapshot export: failed to write record: {}", e);
                    }
                }
                ExportMessage::Flush => {
                    let _ = writer.flush();
                }
                ExportMessage::Shutdown => {
                    let _ = writer.flush();
                    break;
                }
            }
        }
    }

    /// Queues one snapshot row. Non-blocking; a dead writer thread drops the
    /// row rather than failing the simulation.
    pub fn export(&self, time: u64, node: NodeId, features: &[f64; N_FEATURES]) {
        let _ = self.sender.send(ExportMessage::Row { time, node, features: *features });
    }

    pub fn flush(&self) {
        let _ = self.sender.send(ExportMessage::Flush);
    }
}

impl Drop for SnapshotExporter {
    fn drop(&mut self) {
        let _ = self.sender.send(ExportMessage::Shutdown);

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("Snapshot export: writer thread panicked before shutdown");
            }
        }
    }
}
