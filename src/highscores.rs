//! High score persistence
//!
//! A single plain-text file holding the decimal high score. Read once at
//! startup and overwritten when the player dies. A missing file is the
//! normal first-run case, not an error.

use std::fs;
use std::io;
use std::path::Path;

/// Default high-score file, relative to the working directory
pub const HI_SCORE_FILE: &str = "hiscore.txt";

/// Load the high score; missing or unreadable files count as 0
pub fn load(path: &Path) -> u64 {
    match fs::read_to_string(path) {
        Ok(contents) => match contents.trim().parse() {
            Ok(score) => {
                log::info!("loaded high score {} from {}", score, path.display());
                score
            }
            Err(_) => {
                log::warn!(
                    "high score file {} is not a number, starting from 0",
                    path.display()
                );
                0
            }
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("no high score file at {}, starting fresh", path.display());
            0
        }
        Err(err) => {
            log::warn!(
                "could not read high score file {}: {}",
                path.display(),
                err
            );
            0
        }
    }
}

/// Overwrite the high score file with the given score
pub fn save(path: &Path, score: u64) -> io::Result<()> {
    fs::write(path, score.to_string())?;
    log::info!("saved high score {} to {}", score, path.display());
    Ok(())
}
