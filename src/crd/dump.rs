//! Delimited text export of a [Unit]
use crate::{crd::Unit, error::Error};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

impl Unit {
    /// Dumps this [Unit] as commented header lines followed by
    /// `time<delimiter>range` lines, one per measurement.
    pub fn dump<W: Write>(&self, w: &mut W, delimiter: &str) -> std::io::Result<()> {
        if let Some(station) = &self.station {
            writeln!(w, "# Station {} ({})", station.name, station.id)?;
        }
        if let Some(target) = &self.target {
            writeln!(w, "# Target {} ({})", target.name, target.id)?;
        }
        let total = self.sessions.len();
        for (n, session) in self.sessions.iter().enumerate() {
            writeln!(w, "# Session {} / {}", n + 1, total)?;
            if let Some(station) = &session.station {
                writeln!(w, "# Station {} ({})", station.name, station.id)?;
            }
            if let Some(target) = &session.target {
                writeln!(w, "# Target {} ({})", target.name, target.id)?;
            }
            match session.start {
                Some(start) => writeln!(w, "# start at {}", start)?,
                None => writeln!(w, "# No start timestamp specified.")?,
            }
            match session.end {
                Some(end) => writeln!(w, "#   end at {}", end)?,
                None => writeln!(w, "# No end timestamp specified.")?,
            }
            for point in session.ranges() {
                writeln!(w, "{}{}{}", point.time, delimiter, point.range)?;
            }
        }
        Ok(())
    }
    /// Dumps this [Unit] into a new file, see [Self::dump]
    pub fn dump_to_file(&self, path: &Path, delimiter: &str) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        self.dump(&mut w, delimiter)?;
        w.flush()?;
        Ok(())
    }
}
