//! Dependency injection.
//!
//! The same filter or pipeline is written three ways: with its collaborator
//! hard-coded, selected by a boolean flag, and injected by the caller with a
//! sensible default. Only the last one can be extended without editing it.

/// Distance of a point from the origin.
///
/// Any `Fn(&[f64]) -> f64` closure is a `Norm`, so callers can inject ad-hoc
/// metrics without defining a type.
pub trait Norm {
    fn norm(&self, point: &[f64]) -> f64;
}

/// L2 norm.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

/// L1 norm.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Norm for Euclidean {
    fn norm(&self, point: &[f64]) -> f64 {
        point.iter().map(|x| x * x).sum::<f64>().sqrt()
    }
}

impl Norm for Manhattan {
    fn norm(&self, point: &[f64]) -> f64 {
        point.iter().map(|x| x.abs()).sum()
    }
}

impl<F> Norm for F
where
    F: Fn(&[f64]) -> f64,
{
    fn norm(&self, point: &[f64]) -> f64 {
        self(point)
    }
}

/// Annulus `[radius - width/2, radius + width/2]`, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub radius: f64,
    pub width: f64,
}

impl Ring {
    pub fn new(radius: f64, width: f64) -> Self {
        Self { radius, width }
    }

    pub fn inner(&self) -> f64 {
        self.radius - 0.5 * self.width
    }

    pub fn outer(&self) -> f64 {
        self.radius + 0.5 * self.width
    }

    pub fn contains(&self, distance: f64) -> bool {
        distance >= self.inner() && distance <= self.outer()
    }
}

/// Lazily yields the points whose Euclidean distance from the origin lies
/// within the ring.
pub fn points_in_ring<I, P>(points: I, radius: f64, width: f64) -> impl Iterator<Item = P>
where
    I: IntoIterator<Item = P>,
    P: AsRef<[f64]>,
{
    points_in_ring_with(points, radius, width, Euclidean)
}

/// Like [`points_in_ring`], measuring distance with the injected `norm`.
pub fn points_in_ring_with<I, P, N>(
    points: I,
    radius: f64,
    width: f64,
    norm: N,
) -> impl Iterator<Item = P>
where
    I: IntoIterator<Item = P>,
    P: AsRef<[f64]>,
    N: Norm,
{
    let ring = Ring::new(radius, width);
    points
        .into_iter()
        .filter(move |p| ring.contains(norm.norm(p.as_ref())))
}

/// Splits input text into items.
pub type Splitter = fn(&str) -> Vec<&str>;

/// Turns one item into an output string.
pub type Transform = fn(&str) -> String;

pub fn split_words(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

pub fn split_lines(input: &str) -> Vec<&str> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn shout(item: &str) -> String {
    item.to_uppercase()
}

/// Collaborator hard-coded: supporting line splitting means copying this
/// function.
pub fn process_hardcoded(input: &str) -> Vec<String> {
    split_words(input).into_iter().map(shout).collect()
}

/// Collaborator picked by a flag: every new splitter means a new flag.
pub fn process_flagged(input: &str, by_words: bool) -> Vec<String> {
    let splitter: Splitter = if by_words { split_words } else { split_lines };
    splitter(input).into_iter().map(shout).collect()
}

/// Collaborator injected, defaulting to [`split_words`].
pub fn process_with(input: &str, splitter: Option<&dyn Fn(&str) -> Vec<&str>>) -> Vec<String> {
    let items = match splitter {
        Some(split) => split(input),
        None => split_words(input),
    };
    items.into_iter().map(shout).collect()
}

/// A split-then-transform pipeline with both stages injectable.
///
/// `Pipeline::new()` uses [`split_words`] and [`shout`].
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<S, T> {
    splitter: S,
    transform: T,
}

impl Pipeline<Splitter, Transform> {
    pub fn new() -> Self {
        Self {
            splitter: split_words,
            transform: shout,
        }
    }
}

impl Default for Pipeline<Splitter, Transform> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T> Pipeline<S, T>
where
    S: Fn(&str) -> Vec<&str>,
    T: Fn(&str) -> String,
{
    pub fn with_splitter<S2>(self, splitter: S2) -> Pipeline<S2, T>
    where
        S2: Fn(&str) -> Vec<&str>,
    {
        Pipeline {
            splitter,
            transform: self.transform,
        }
    }

    pub fn with_transform<T2>(self, transform: T2) -> Pipeline<S, T2>
    where
        T2: Fn(&str) -> String,
    {
        Pipeline {
            splitter: self.splitter,
            transform,
        }
    }

    pub fn run(&self, input: &str) -> Vec<String> {
        (self.splitter)(input)
            .into_iter()
            .map(|item| (self.transform)(item))
            .collect()
    }
}
