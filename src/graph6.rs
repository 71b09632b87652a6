//! graph6 codec (spec §4.11), grounded on the teacher's
//! `src/graph6/graph6_decoder.rs` and `src/graph6/graph6_encoder.rs`, but
//! building a `UndirectedGraph`'s adjacency directly instead of an
//! intermediate edge list, since there is no `petgraph::Graph` to hand it to
//! here.

use error_stack::{report, Result};

use crate::bitset::{MAX_EDGES, MAX_VERTICES};
use crate::error::FrankError;
use crate::model::UndirectedGraph;

/// graph6 bytes are offset from ASCII by this amount; also doubles as the
/// escape value (63) marking the 18-bit order encoding.
const N_OFFSET: u8 = 63;
const HEADER: &str = ">>graph6<<";

/// Decodes one graph6 line (header optional, no trailing newline) into a
/// validated cubic `UndirectedGraph`.
pub fn decode(line: &str) -> Result<UndirectedGraph, FrankError> {
    let body = line.strip_prefix(HEADER).unwrap_or(line);
    let bytes: Vec<u8> = body.bytes().collect();
    if bytes.is_empty() || bytes.iter().any(|&b| !(N_OFFSET..=126).contains(&b)) {
        return Err(report!(FrankError::MalformedGraph6)
            .attach_printable("line is empty or contains a byte outside the graph6 range"));
    }
    let values: Vec<u8> = bytes.iter().map(|&b| b - N_OFFSET).collect();

    let (n, rest) = decode_order(&values)?;
    if n > MAX_VERTICES {
        return Err(report!(FrankError::TooLarge)
            .attach_printable(format!("n = {n} exceeds the compiled bit width")));
    }
    if 3 * n / 2 > MAX_EDGES {
        return Err(report!(FrankError::TooLarge)
            .attach_printable(format!("m = 3n/2 = {} exceeds the compiled bit width", 3 * n / 2)));
    }

    let bits = bytes_to_bits(rest);
    let needed = n * (n.saturating_sub(1)) / 2;
    if bits.len() < needed {
        return Err(report!(FrankError::MalformedGraph6)
            .attach_printable("adjacency section is shorter than the upper triangle it must encode"));
    }

    let mut edges = Vec::with_capacity(3 * n / 2);
    let mut i = 0;
    for col in 1..n {
        for row in 0..col {
            if bits[i] {
                edges.push((row, col));
            }
            i += 1;
        }
    }

    UndirectedGraph::from_edges(n, &edges)
}

/// Encodes `g` as a graph6 line (no header, no trailing newline).
pub fn encode(g: &UndirectedGraph) -> String {
    let n = g.n();
    let mut bits = order_to_bits(n);

    for col in 1..n {
        for row in 0..col {
            bits.push(g.is_adjacent(row, col));
        }
    }

    let mut out = String::with_capacity(bits.len() / 6 + 4);
    for chunk in bits.chunks(6) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            if bit {
                byte |= 1 << (5 - i);
            }
        }
        out.push((byte + N_OFFSET) as char);
    }
    out
}

/// Reads the order prefix: a single byte for n <= 62, or an escape byte (63)
/// followed by three bytes encoding n as an 18-bit big-endian value.
/// Returns `(n, remaining adjacency bytes)`.
fn decode_order(values: &[u8]) -> Result<(usize, &[u8]), FrankError> {
    match values.first() {
        Some(&N_OFFSET) => {
            if values.len() < 4 {
                return Err(report!(FrankError::MalformedGraph6)
                    .attach_printable("escape byte present but the 18-bit order is truncated"));
            }
            let order_bits = bytes_to_bits(&values[1..4]);
            let n = bits_to_usize(&order_bits[..18]);
            Ok((n, &values[4..]))
        }
        Some(&b) => Ok((b as usize, &values[1..])),
        None => Err(report!(FrankError::MalformedGraph6).attach_printable("empty graph6 body")),
    }
}

fn order_to_bits(n: usize) -> Vec<bool> {
    if n < N_OFFSET as usize {
        usize_to_bits(n, 6)
    } else {
        let mut bits = usize_to_bits(N_OFFSET as usize, 6);
        bits.extend(usize_to_bits(n, 18));
        bits
    }
}

fn bytes_to_bits(values: &[u8]) -> Vec<bool> {
    values.iter().flat_map(|&v| usize_to_bits(v as usize, 6)).collect()
}

fn usize_to_bits(value: usize, width: u32) -> Vec<bool> {
    (0..width).rev().map(|i| (value >> i) & 1 == 1).collect()
}

fn bits_to_usize(bits: &[bool]) -> usize {
    bits.iter().fold(0usize, |acc, &b| (acc << 1) | b as usize)
}
