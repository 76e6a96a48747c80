//! Integration test crate for StageCut.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on multiple stagecut crates to verify they work together.


#[cfg(test)]
mod editing;

#[cfg(test)]
mod playback;

#[cfg(test)]
mod assistants;

#[cfg(test)]
mod export;
