use crate::camera_control::CameraClient;
use crate::config::DownloadOptions;
use crate::error::{Error, Error::*, Result};
use crate::progress::download_bar;
use indicatif::ProgressBar;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DownloadSummary {
    /// Written files, in the order the camera listed them.
    pub files: Vec<PathBuf>,
    pub bytes: u64,
}

/// Download every file of `dir` in `set` into `output_dir`, creating it if needed.
///
/// Stops at the first failing file and returns its error. Files written up to that point stay on
/// disk.
pub fn download_all(
    client: &CameraClient,
    set: u32,
    dir: u32,
    output_dir: &Path,
    options: &DownloadOptions,
) -> Result<DownloadSummary> {
    if options.jobs == 0 {
        return Err(InvalidArgument("at least one download job is required".to_string()));
    }

    fs::create_dir_all(output_dir).map_err(|e| IoError(output_dir.to_path_buf(), e))?;

    let names = client.list_files(set, dir)?;
    info!(
        "downloading {} files of set {} and dir {} to {}",
        names.len(),
        set,
        dir,
        output_dir.display()
    );

    let bar = download_bar(options.progress, names.len());
    let result = if options.jobs == 1 || names.len() <= 1 {
        download_sequential(client, set, dir, &names, output_dir, &bar)
    } else {
        download_parallel(client, set, dir, &names, output_dir, options.jobs, &bar)
    };

    match &result {
        Ok(summary) => {
            bar.finish_with_message("done");
            info!(
                "downloaded {} files ({} bytes)",
                summary.files.len(),
                summary.bytes
            );
        }
        Err(e) => {
            bar.abandon_with_message("failed");
            warn!("download aborted: {}", e);
        }
    }
    result
}

fn download_sequential(
    client: &CameraClient,
    set: u32,
    dir: u32,
    names: &[String],
    output_dir: &Path,
    bar: &ProgressBar,
) -> Result<DownloadSummary> {
    let mut summary = DownloadSummary::default();
    for name in names {
        bar.set_message(name.clone());
        let (path, bytes) = client.download_file(set, dir, name, output_dir)?;
        summary.files.push(path);
        summary.bytes += bytes;
        bar.inc(1);
    }
    Ok(summary)
}

fn download_parallel(
    client: &CameraClient,
    set: u32,
    dir: u32,
    names: &[String],
    output_dir: &Path,
    jobs: usize,
    bar: &ProgressBar,
) -> Result<DownloadSummary> {
    let next_index = AtomicUsize::new(0);
    let total_bytes = AtomicU64::new(0);
    let cancel = AtomicBool::new(false);
    let first_error: Mutex<Option<Error>> = Mutex::new(None);

    std::thread::scope(|scope| {
        for worker_id in 0..jobs.min(names.len()) {
            let next_index = &next_index;
            let total_bytes = &total_bytes;
            let cancel = &cancel;
            let first_error = &first_error;
            scope.spawn(move || {
                loop {
                    if cancel.load(Ordering::Relaxed) {
                        break;
                    }
                    let idx = next_index.fetch_add(1, Ordering::Relaxed);
                    let Some(name) = names.get(idx) else {
                        break;
                    };
                    debug!("worker {} takes {}", worker_id, name);
                    bar.set_message(name.clone());

                    match client.download_file(set, dir, name, output_dir) {
                        Ok((_, bytes)) => {
                            total_bytes.fetch_add(bytes, Ordering::Relaxed);
                            bar.inc(1);
                        }
                        Err(e) => {
                            record_error(first_error, cancel, e);
                            break;
                        }
                    }
                }
            });
        }
    });

    let first_error = first_error
        .into_inner()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(e) = first_error {
        return Err(e);
    }

    Ok(DownloadSummary {
        files: names.iter().map(|name| output_dir.join(name)).collect(),
        bytes: total_bytes.into_inner(),
    })
}

fn record_error(first_error: &Mutex<Option<Error>>, cancel: &AtomicBool, err: Error) {
    cancel.store(true, Ordering::Relaxed);
    let mut slot = first_error
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if slot.is_none() {
        *slot = Some(err);
    } else {
        debug!("dropping follow-up error: {}", err);
    }
}
