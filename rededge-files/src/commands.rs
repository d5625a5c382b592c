//! Runs a [`Config`] against the camera and prints the results.

use crate::camera_control::CameraClient;
use crate::config::{Command, Config};
use crate::download::download_all;
use crate::error::{Error::*, Result};
use crate::util::format_list;
use std::io::Write;
use std::path::PathBuf;

fn write_out<W>(out: &mut W, text: &str) -> Result<()>
where
    W: Write,
{
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| IoError(PathBuf::from("<stdout>"), e))
}

pub fn run<W>(config: &Config, out: &mut W) -> Result<()>
where
    W: Write,
{
    let client = CameraClient::from_config(config)?;

    match &config.command {
        Command::ListSets => {
            let sets = client.list_sets()?;
            write_out(out, "Sets available:\n")?;
            write_out(out, &format_list(&sets))?;
        }
        Command::ListSetDirs { set } => {
            let dirs = client.list_set_dirs(*set)?;
            write_out(out, &format!("Dirs of set {set}:\n"))?;
            write_out(out, &format_list(&dirs))?;
        }
        Command::ListSetFiles { set, dir } => {
            let files = client.list_files(*set, *dir)?;
            write_out(out, &format!("Files of set {set} and dir {dir}:\n"))?;
            write_out(out, &format_list(&files))?;
        }
        Command::Download {
            set,
            dir,
            output_path,
            options,
        } => {
            write_out(
                out,
                &format!("Downloading files of set {set} and dir {dir}\n"),
            )?;
            download_all(&client, *set, *dir, output_path, options)?;
            write_out(out, "All files have been downloaded\n")?;
        }
    }

    Ok(())
}
