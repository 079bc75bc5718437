use super::*;
use rand::Rng;
use rand_distr::Geometric;

impl ReducedGraph {
    /// Generates a Gilbert graph `G(n,p)`: each of the `n(n-1)/2` possible edges exists
    /// independently with probability `p` (clamped to `[0, 1]`). All vertices start active.
    pub fn random_gnp<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Self {
        let p = p.clamp(0.0, 1.0);
        let edges: Vec<_> = BernoulliSamplingRange::new(rng, 0, (n as i64) * (n as i64), p)
            .filter_map(|x| {
                let u = x / (n as i64);
                let v = x % (n as i64);
                (u < v).then_some(Edge(u as Node, v as Node))
            })
            .collect();

        Self::from_edges(n, edges)
    }
}

/// Provides an iterator similarly to Range, but
/// includes each element i.i.d. with probability of p
pub struct BernoulliSamplingRange<'a, R: Rng> {
    current: i64,
    end: i64,
    distr: Option<Geometric>,
    rng: &'a mut R,
}

impl<'a, R: Rng> BernoulliSamplingRange<'a, R> {
    pub fn new(rng: &'a mut R, begin: i64, end: i64, prob: f64) -> Self {
        debug_assert!(begin <= end);
        debug_assert!((0.0..=1.0).contains(&prob));
        Self {
            rng,
            current: begin - 1,
            end,
            // Geometric rejects p == 0; such a range is empty anyway
            distr: (prob > 0.0).then(|| Geometric::new(prob).ok()).flatten(),
        }
    }

    fn try_advance(&mut self) {
        if self.current >= self.end {
            return;
        }

        let Some(distr) = self.distr.as_ref() else {
            self.current = self.end;
            return;
        };

        let skip = self.rng.sample(distr);
        if skip > i64::MAX as u64 {
            self.current = self.end;
        } else {
            self.current += 1;
            self.current = match self.current.checked_add(skip as i64) {
                Some(x) => x,
                None => self.end,
            }
        }
    }
}

impl<R: Rng> Iterator for BernoulliSamplingRange<'_, R> {
    type Item = i64;
    fn next(&mut self) -> Option<Self::Item> {
        self.try_advance();

        if self.current >= self.end {
            None
        } else {
            Some(self.current)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn bernoulli_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);

        assert_eq!(BernoulliSamplingRange::new(rng, 0, 0, 1.0).count(), 0);
        assert_eq!(BernoulliSamplingRange::new(rng, 0, 10, 1.0).count(), 10);
        assert_eq!(BernoulliSamplingRange::new(rng, 0, 100, 0.0).count(), 0);

        let min = 3;
        let max = 100;
        let mut counts = vec![0; max as usize];
        for _ in 0..1000 {
            for x in BernoulliSamplingRange::new(rng, min, max, 0.25) {
                assert!(min <= x);
                assert!(x < max);
                counts[x as usize] += 1;
            }
        }

        assert!(counts.iter().enumerate().all(|(i, &c)| {
            if i < min as usize {
                c == 0
            } else {
                (150..350).contains(&c)
            }
        }));
    }

    #[test]
    fn gnp_edge_count() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1337);

        for p in [0.01, 0.1] {
            let repeats = 100;
            let n = 100;

            let mean_edges = (0..repeats)
                .map(|_| ReducedGraph::random_gnp(rng, n, p).number_of_edges() as f64)
                .sum::<f64>()
                / repeats as f64;

            let expected = p * (n as f64) * ((n - 1) as f64) / 2.0;

            assert!((0.75 * expected..1.25 * expected).contains(&mean_edges));
        }
    }
}
