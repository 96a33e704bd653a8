//! Reads a set of triangles from stdin, finds every triangle that
//! intersects at least one other, and prints their ids (one per line, in
//! ascending order) to stdout.
//!
//! Input format: a line with the triangle count `n`, followed by `n`
//! groups of nine whitespace-separated floats (three vertices' x y z),
//! whitespace- and newline-insensitive otherwise. Triangle ids are their
//! 0-based position in the input.

use std::io::{self, Read, Write};
use std::process::ExitCode;
use triangles::{Bvh, Point, Triangle};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let mut dump_path: Option<String> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dump" => {
                dump_path = args.next();
                if dump_path.is_none() {
                    eprintln!("--dump requires a path argument");
                    return ExitCode::FAILURE;
                }
            }
            other => {
                eprintln!("unrecognised argument: {other}");
                return ExitCode::FAILURE;
            }
        }
    }

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("failed to read stdin: {e}");
        return ExitCode::FAILURE;
    }

    let triangles = match parse_triangles(&input) {
        Ok(triangles) => triangles,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let bvh = Bvh::build(triangles);

    if let Some(path) = dump_path {
        if let Err(e) = write_dump(&bvh, &path) {
            eprintln!("failed to write dump to {path}: {e}");
            return ExitCode::FAILURE;
        }
    }

    let hits = match bvh.find_intersecting() {
        Ok(hits) => hits,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut ids: Vec<usize> = hits.into_iter().collect();
    ids.sort_unstable();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for id in ids {
        let _ = writeln!(out, "{id}");
    }

    ExitCode::SUCCESS
}

#[cfg(feature = "dump")]
fn write_dump(bvh: &Bvh, path: &str) -> io::Result<()> {
    let mut f = std::fs::File::create(path)?;
    triangles::accelerators::bvh::dump::dump(bvh, &mut f)
}

#[cfg(not(feature = "dump"))]
fn write_dump(_bvh: &Bvh, _path: &str) -> io::Result<()> {
    eprintln!("--dump was given but this binary was built without the `dump` feature");
    Ok(())
}

fn parse_triangles(input: &str) -> Result<Vec<Triangle>, triangles::InputError> {
    let mut tokens = input.split_whitespace();

    let count: usize = tokens
        .next()
        .ok_or_else(|| triangles::InputError::Malformed {
            index: "count".to_string(),
            reason: "missing triangle count".to_string(),
        })?
        .parse()
        .map_err(|_| triangles::InputError::Malformed {
            index: "count".to_string(),
            reason: "triangle count is not an integer".to_string(),
        })?;

    let mut triangles = Vec::with_capacity(count);
    for id in 0..count {
        let mut next = || {
            tokens
                .next()
                .ok_or_else(|| triangles::InputError::Malformed {
                    index: id.to_string(),
                    reason: "not enough coordinates".to_string(),
                })
                .and_then(|tok| {
                    tok.parse::<f64>().map_err(|_| triangles::InputError::Malformed {
                        index: id.to_string(),
                        reason: format!("'{tok}' is not a number"),
                    })
                })
        };

        let p0 = Point::new(next()?, next()?, next()?);
        let p1 = Point::new(next()?, next()?, next()?);
        let p2 = Point::new(next()?, next()?, next()?);
        triangles.push(Triangle::new(id, p0, p1, p2));
    }

    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_pair() {
        let input = "2\n\
            0 0 0  1 0 0  0 1 0\n\
            1 1 0  3 1 0  1 3 0\n";
        let triangles = parse_triangles(input).unwrap();
        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[0].id, 0);
        assert_eq!(triangles[1].id, 1);
    }

    #[test]
    fn rejects_bad_count() {
        let err = parse_triangles("not-a-number\n").unwrap_err();
        match err {
            triangles::InputError::Malformed { index, .. } => assert_eq!(index, "count"),
        }
    }

    #[test]
    fn rejects_truncated_triangle() {
        let err = parse_triangles("1\n0 0 0 1 0").unwrap_err();
        match err {
            triangles::InputError::Malformed { index, .. } => assert_eq!(index, "0"),
        }
    }
}
