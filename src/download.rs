//! Cached download of NAIF generic planetary kernels.
//!
//! Only compiled with the `jpl-download` feature. Kernels are fetched from the
//! NAIF generic-kernel archive into the user cache directory and reused on
//! subsequent calls. The download streams into a `.part` file that is renamed
//! into place only after the transfer completes, so an interrupted or failed
//! fetch never shows up as a cache hit.

use camino::{Utf8Path, Utf8PathBuf};
use directories::BaseDirs;
use log::info;
use std::fs;
use tokio::{fs::File, io::AsyncWriteExt};
use tokio_stream::StreamExt;

use crate::orrery_errors::OrreryError;

const NAIF_SPK_BASE_URL: &str = "https://naif.jpl.nasa.gov/pub/naif/generic_kernels/spk/planets";

/// Return the cached kernel path if a usable copy is present.
///
/// A zero-length file is the residue of an interrupted transfer, not a kernel,
/// and is not a cache hit.
fn cached_kernel(cache_dir: &Utf8Path, version: &str) -> Option<Utf8PathBuf> {
    let local_file = cache_dir.join(format!("{version}.bsp"));
    match fs::metadata(&local_file) {
        Ok(meta) if meta.is_file() && meta.len() > 0 => Some(local_file),
        _ => None,
    }
}

/// Stream one kernel over HTTP into a partial file.
///
/// The HTTP status is checked before any byte is written, so a 404 from the
/// archive (e.g. a typoed version) fails without touching the filesystem.
///
/// Return
/// ------
/// * The number of bytes written on success.
async fn stream_kernel(url: &str, part: &Utf8Path) -> Result<u64, OrreryError> {
    let response = reqwest::get(url).await?.error_for_status()?;

    let mut file = File::create(part).await?;
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        written += chunk.len() as u64;
        file.write_all(&chunk).await?;
    }

    file.flush().await?;
    Ok(written)
}

/// Resolve a NAIF generic planetary kernel to a local path, downloading it
/// into the user cache directory if necessary.
///
/// Arguments
/// ---------
/// * `version`: the kernel version to fetch, example: `"de440s"` or `"de442"`
///
/// Return
/// ------
/// * The path of the cached `.bsp` file
/// * An error if the cache directory cannot be created or the download fails;
///   a failed download leaves no partial kernel behind
pub fn get_spk_file(version: &str) -> Result<Utf8PathBuf, OrreryError> {
    let base_dir = BaseDirs::new().ok_or_else(|| {
        OrreryError::UnableToCreateBaseDir("cannot resolve the user base directory".to_string())
    })?;

    let cache_path = Utf8Path::from_path(base_dir.cache_dir()).ok_or_else(|| {
        OrreryError::UnableToCreateBaseDir("cache path is not valid UTF-8".to_string())
    })?;
    let cache_path = cache_path.join("orrery_cache").join("spk");
    fs::create_dir_all(&cache_path)?;

    if let Some(local_file) = cached_kernel(&cache_path, version) {
        return Ok(local_file);
    }

    let url = format!("{NAIF_SPK_BASE_URL}/{version}.bsp");
    let local_file = cache_path.join(format!("{version}.bsp"));
    let part_file = cache_path.join(format!("{version}.bsp.part"));

    info!("downloading {url}");
    let rt = tokio::runtime::Runtime::new()?;
    match rt.block_on(stream_kernel(&url, &part_file)) {
        Ok(bytes) => {
            // Publish only once the full stream is on disk.
            fs::rename(&part_file, &local_file)?;
            info!("downloaded {url} ({bytes} bytes)");
            Ok(local_file)
        }
        Err(err) => {
            let _ = fs::remove_file(&part_file);
            Err(err)
        }
    }
}
