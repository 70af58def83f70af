use std::io::Write;

use crate::{
    clients::{
        TimeRange,
        entities::{Artist, ArtistResult, Track, TrackResult},
        errors::Result,
    },
    fanout::ByRange,
};

/// Shown in place of the primary artist when a track credits nobody
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Writes ranked lists, one section per time window.
///
/// Sections are separated by a single blank line, items are numbered from 1
/// in the order the API returned them.
pub struct Presenter<W> {
    out: W,
    sections: usize,
}

impl<W: Write> Presenter<W> {
    /// Write to `out`, usually stdout
    pub fn new(out: W) -> Self {
        Presenter { out, sections: 0 }
    }

    /// Print one artists section per window
    pub fn artists(&mut self, top: &ByRange<ArtistResult>) -> Result<()> {
        for (range, page) in top.iter() {
            self.section("artists", range, page.items.iter().map(format_artist))?;
        }
        Ok(())
    }

    /// Print one tracks section per window
    pub fn tracks(&mut self, top: &ByRange<TrackResult>) -> Result<()> {
        for (range, page) in top.iter() {
            self.section("tracks", range, page.items.iter().map(format_track))?;
        }
        Ok(())
    }

    /// Give back the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn section(
        &mut self,
        kind: &str,
        range: TimeRange,
        lines: impl Iterator<Item = String>,
    ) -> Result<()> {
        if self.sections > 0 {
            writeln!(self.out)?;
        }
        self.sections += 1;

        writeln!(self.out, "Top five {kind} {}:", range.label())?;
        for (rank, line) in lines.enumerate() {
            writeln!(self.out, "{}. {line}", rank + 1)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

fn format_artist(artist: &Artist) -> String {
    artist.name.clone()
}

/// `<name> - <primary artist>`
#[must_use]
pub fn format_track(track: &Track) -> String {
    format!(
        "{} - {}",
        track.name,
        track.primary_artist().unwrap_or(UNKNOWN_ARTIST)
    )
}
