use std::io::Write;

use crate::error::Result;
use crate::sim::Step;

/// Write one step as `index position velocity`.
///
/// Floats use the shortest text that parses back to the same value, so a
/// velocity of `0.0396` computed as `0.039599999999999996` prints in full
/// rather than rounded to 12 significant digits.
pub fn write_step<W: Write>(writer: &mut W, step: &Step) -> Result<()> {
    writeln!(writer, "{} {} {}", step.index, step.position, step.velocity)?;
    Ok(())
}

/// Write each step as soon as it is produced. Returns the number written.
pub fn write_steps<W, I>(writer: &mut W, steps: I) -> Result<u64>
where
    W: Write,
    I: IntoIterator<Item = Step>,
{
    let mut written = 0;
    for step in steps {
        write_step(writer, &step)?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coefficients;
    use crate::sim::simulate;

    #[test]
    fn line_format() {
        let mut buf = Vec::new();
        write_step(&mut buf, &Step { index: 7, position: 1.25, velocity: 0.5 }).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "7 1.25 0.5\n");
    }

    #[test]
    fn streams_whole_run() {
        let c = Coefficients { power: 0.2, drag: 0.98 };
        let mut buf = Vec::new();
        let written = write_steps(&mut buf, simulate(5000, c)).unwrap();
        assert_eq!(written, 5000);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5000);
        assert_eq!(lines[0], "0 0 0");
        assert!(lines[4999].starts_with("4999 "));
        for line in &lines {
            assert_eq!(line.split(' ').count(), 3, "bad line {:?}", line);
        }
    }

    #[test]
    fn floats_print_exact_value() {
        let velocity = 0.0596 - 0.02;
        let mut buf = Vec::new();
        write_step(&mut buf, &Step { index: 2, position: 0.0596, velocity }).unwrap();
        let line = String::from_utf8(buf).unwrap();
        let fields: Vec<&str> = line.trim_end().split(' ').collect();
        assert_eq!(fields[1], "0.0596");
        assert_eq!(fields[2].parse::<f64>().unwrap(), velocity);
    }
}
