//! Front-chain sibling packing with a minimal enclosing circle

use super::{CirclePacker, PackItem, PackedCircle};
use crate::error::{ChartError, ChartResult};

/// Front-chain circle packer
///
/// Circles get radius `sqrt(datum)`, are placed in input order tangent to the
/// current front chain, then the whole layout is translated and scaled so its
/// minimal enclosing circle is the unit circle.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontChainPacker;

impl FrontChainPacker {
    pub fn new() -> Self {
        Self
    }
}

impl CirclePacker for FrontChainPacker {
    fn pack(&self, items: &[PackItem]) -> ChartResult<Vec<PackedCircle>> {
        if let Some(bad) = items.iter().find(|i| !(i.datum.is_finite() && i.datum > 0.0)) {
            return Err(ChartError::Packing(format!(
                "item {} has non-positive weight {}",
                bad.id, bad.datum
            )));
        }
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut circles: Vec<Circle> = items
            .iter()
            .map(|i| Circle::new(0.0, 0.0, i.datum.sqrt()))
            .collect();
        let chain = pack_siblings(&mut circles)?;

        let front: Vec<Circle> = chain.iter().map(|&i| circles[i]).collect();
        let mut enclosing = enclose(&front).unwrap_or_else(|| {
            log::debug!("enclosing circle search failed, using bounding circle");
            bounding_circle(&circles)
        });
        // Float error in the enclosure must not push circles past the boundary
        enclosing.r = circles.iter().fold(enclosing.r, |r, c| {
            r.max((c.x - enclosing.x).hypot(c.y - enclosing.y) + c.r)
        });

        let k = 1.0 / enclosing.r;
        log::debug!(
            "packed {} circles, enclosing radius {:.4}",
            circles.len(),
            enclosing.r
        );
        Ok(items
            .iter()
            .zip(&circles)
            .map(|(item, c)| PackedCircle {
                id: item.id,
                x: (c.x - enclosing.x) * k,
                y: (c.y - enclosing.y) * k,
                r: c.r * k,
            })
            .collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Circle {
    x: f64,
    y: f64,
    r: f64,
}

impl Circle {
    fn new(x: f64, y: f64, r: f64) -> Self {
        Self { x, y, r }
    }
}

/// Place `c` tangent to both `a` and `b`
fn place(b: &Circle, a: &Circle, c: &mut Circle) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let d2 = dx * dx + dy * dy;
    if d2 > 0.0 {
        let a2 = (a.r + c.r).powi(2);
        let b2 = (b.r + c.r).powi(2);
        if a2 > b2 {
            let x = (d2 + b2 - a2) / (2.0 * d2);
            let y = (b2 / d2 - x * x).max(0.0).sqrt();
            c.x = b.x - x * dx - y * dy;
            c.y = b.y - x * dy + y * dx;
        } else {
            let x = (d2 + a2 - b2) / (2.0 * d2);
            let y = (a2 / d2 - x * x).max(0.0).sqrt();
            c.x = a.x + x * dx - y * dy;
            c.y = a.y + x * dy + y * dx;
        }
    } else {
        c.x = a.x + c.r;
        c.y = a.y;
    }
}

fn intersects(a: &Circle, b: &Circle) -> bool {
    let dr = a.r + b.r - 1e-6;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr > 0.0 && dr * dr > dx * dx + dy * dy
}

/// Squared distance from the origin to the weighted midpoint of `a` and `b`
fn score(a: &Circle, b: &Circle) -> f64 {
    let ab = a.r + b.r;
    let dx = (a.x * b.r + b.x * a.r) / ab;
    let dy = (a.y * b.r + b.y * a.r) / ab;
    dx * dx + dy * dy
}

/// Position all circles; returns the indices of the final front chain
fn pack_siblings(circles: &mut [Circle]) -> ChartResult<Vec<usize>> {
    let n = circles.len();
    circles[0].x = 0.0;
    circles[0].y = 0.0;
    if n == 1 {
        return Ok(vec![0]);
    }

    circles[0].x = -circles[1].r;
    circles[1].x = circles[0].r;
    circles[1].y = 0.0;
    if n == 2 {
        return Ok(vec![0, 1]);
    }

    let (head, tail) = circles.split_at_mut(2);
    place(&head[1], &head[0], &mut tail[0]);

    // Doubly linked front chain over circle indices
    let mut next = vec![0usize; n];
    let mut prev = vec![0usize; n];
    let (mut a, mut b) = (0usize, 1usize);
    next[0] = 1;
    prev[2] = 1;
    next[1] = 2;
    prev[0] = 2;
    next[2] = 0;
    prev[1] = 0;

    let max_steps = n.saturating_mul(n).saturating_mul(4).max(64);
    let mut steps = 0usize;
    let mut i = 3;
    'pack: while i < n {
        steps += 1;
        if steps > max_steps {
            return Err(ChartError::Packing("front chain did not converge".into()));
        }

        let (ca, cb) = (circles[a], circles[b]);
        place(&ca, &cb, &mut circles[i]);
        let c = circles[i];

        // Closest intersecting circle on the chain, walking both directions
        let (mut j, mut k) = (next[b], prev[a]);
        let (mut sj, mut sk) = (circles[b].r, circles[a].r);
        loop {
            if sj <= sk {
                if intersects(&circles[j], &c) {
                    b = j;
                    next[a] = b;
                    prev[b] = a;
                    continue 'pack;
                }
                sj += circles[j].r;
                j = next[j];
            } else {
                if intersects(&circles[k], &c) {
                    a = k;
                    next[a] = b;
                    prev[b] = a;
                    continue 'pack;
                }
                sk += circles[k].r;
                k = prev[k];
            }
            if j == next[k] {
                break;
            }
        }

        prev[i] = a;
        next[i] = b;
        next[a] = i;
        prev[b] = i;
        b = i;

        // New closest pair to the centroid
        let mut best = score(&circles[a], &circles[next[a]]);
        let mut node = next[b];
        while node != b {
            let s = score(&circles[node], &circles[next[node]]);
            if s < best {
                a = node;
                best = s;
            }
            node = next[node];
        }
        b = next[a];
        i += 1;
    }

    let mut chain = vec![b];
    let mut node = next[b];
    while node != b {
        chain.push(node);
        node = next[node];
    }
    Ok(chain)
}

/// Smallest circle enclosing all `circles` (Welzl move-to-front)
fn enclose(circles: &[Circle]) -> Option<Circle> {
    let mut basis: Vec<Circle> = Vec::new();
    let mut e: Option<Circle> = None;
    let mut i = 0;
    let mut restarts = 0usize;
    let limit = circles.len().saturating_mul(circles.len()).saturating_mul(8).max(64);

    while i < circles.len() {
        let p = circles[i];
        match e {
            Some(ref current) if encloses_weak(current, &p) => i += 1,
            _ => {
                restarts += 1;
                if restarts > limit {
                    return None;
                }
                basis = extend_basis(&basis, &p)?;
                e = Some(enclose_basis(&basis)?);
                i = 0;
            }
        }
    }
    e
}

fn extend_basis(basis: &[Circle], p: &Circle) -> Option<Vec<Circle>> {
    if encloses_weak_all(p, basis) {
        return Some(vec![*p]);
    }

    for b in basis {
        if encloses_not(p, b) && encloses_weak_all(&enclose_basis2(b, p), basis) {
            return Some(vec![*b, *p]);
        }
    }

    for (i, bi) in basis.iter().enumerate() {
        for bj in &basis[i + 1..] {
            if encloses_not(&enclose_basis2(bi, bj), p)
                && encloses_not(&enclose_basis2(bi, p), bj)
                && encloses_not(&enclose_basis2(bj, p), bi)
                && encloses_weak_all(&enclose_basis3(bi, bj, p), basis)
            {
                return Some(vec![*bi, *bj, *p]);
            }
        }
    }

    None
}

fn encloses_not(a: &Circle, b: &Circle) -> bool {
    let dr = a.r - b.r;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr < 0.0 || dr * dr < dx * dx + dy * dy
}

fn encloses_weak(a: &Circle, b: &Circle) -> bool {
    let dr = a.r - b.r + a.r.max(b.r).max(1.0) * 1e-9;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr > 0.0 && dr * dr > dx * dx + dy * dy
}

fn encloses_weak_all(a: &Circle, basis: &[Circle]) -> bool {
    basis.iter().all(|b| encloses_weak(a, b))
}

fn enclose_basis(basis: &[Circle]) -> Option<Circle> {
    let e = match basis {
        [a] => *a,
        [a, b] => enclose_basis2(a, b),
        [a, b, c] => enclose_basis3(a, b, c),
        _ => return None,
    };
    (e.x.is_finite() && e.y.is_finite() && e.r.is_finite()).then_some(e)
}

fn enclose_basis2(a: &Circle, b: &Circle) -> Circle {
    let x21 = b.x - a.x;
    let y21 = b.y - a.y;
    let r21 = b.r - a.r;
    let l = x21.hypot(y21);
    Circle::new(
        (a.x + b.x + x21 / l * r21) / 2.0,
        (a.y + b.y + y21 / l * r21) / 2.0,
        (l + a.r + b.r) / 2.0,
    )
}

fn enclose_basis3(a: &Circle, b: &Circle, c: &Circle) -> Circle {
    let (x1, y1, r1) = (a.x, a.y, a.r);
    let (x2, y2, r2) = (b.x, b.y, b.r);
    let (x3, y3, r3) = (c.x, c.y, c.r);
    let a2 = x1 - x2;
    let a3 = x1 - x3;
    let b2 = y1 - y2;
    let b3 = y1 - y3;
    let c2 = r2 - r1;
    let c3 = r3 - r1;
    let d1 = x1 * x1 + y1 * y1 - r1 * r1;
    let d2 = d1 - x2 * x2 - y2 * y2 + r2 * r2;
    let d3 = d1 - x3 * x3 - y3 * y3 + r3 * r3;
    let ab = a3 * b2 - a2 * b3;
    let xa = (b2 * d3 - b3 * d2) / (ab * 2.0) - x1;
    let xb = (b3 * c2 - b2 * c3) / ab;
    let ya = (a3 * d2 - a2 * d3) / (ab * 2.0) - y1;
    let yb = (a2 * c3 - a3 * c2) / ab;
    let qa = xb * xb + yb * yb - 1.0;
    let qb = 2.0 * (r1 + xa * xb + ya * yb);
    let qc = xa * xa + ya * ya - r1 * r1;
    let r = -(if qa.abs() > 1e-6 {
        (qb + (qb * qb - 4.0 * qa * qc).sqrt()) / (2.0 * qa)
    } else {
        qc / qb
    });
    Circle::new(x1 + xa + xb * r, y1 + ya + yb * r, r)
}

/// Circle around the centroid of all centers that covers every circle
fn bounding_circle(circles: &[Circle]) -> Circle {
    let n = circles.len().max(1) as f64;
    let cx = circles.iter().map(|c| c.x).sum::<f64>() / n;
    let cy = circles.iter().map(|c| c.y).sum::<f64>() / n;
    let r = circles
        .iter()
        .map(|c| (c.x - cx).hypot(c.y - cy) + c.r)
        .fold(0.0, f64::max);
    Circle::new(cx, cy, r)
}
