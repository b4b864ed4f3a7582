use crate::{assert_float_eq, env::Environment, eval::Evaluator, tree::Tree};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Helper for sampling multiple variables at once.
pub struct Sampler {
    samples_per_var: usize,
    var_samples: Vec<f64>,
    sample: Vec<f64>,
    counter: Vec<usize>,
    done: bool,
}

impl Sampler {
    /**
    Create a sampler for all the variables. `vardata` should contain a
    tuple of (variable name, lower bound, upper bound). The variables
    are sampled between the bounds, `samples_per_var` times.
    */
    pub fn new(vardata: &[(&str, f64, f64)], samples_per_var: usize, seed: u64) -> Sampler {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut var_samples = Vec::with_capacity(vardata.len() * samples_per_var);
        for &(_name, lower, upper) in vardata {
            let span = upper - lower;
            for _ in 0..samples_per_var {
                var_samples.push(lower + rng.random::<f64>() * span);
            }
        }
        Sampler {
            samples_per_var,
            var_samples,
            sample: vec![f64::NAN; vardata.len()],
            counter: vec![0; vardata.len()],
            done: samples_per_var == 0,
        }
    }

    pub fn next(&mut self) -> Option<&[f64]> {
        if self.done {
            return None;
        }
        for (i, c) in self.counter.iter().enumerate() {
            self.sample[i] = self.var_samples[i * self.samples_per_var + *c];
        }
        for c in self.counter.iter_mut() {
            *c += 1;
            if *c < self.samples_per_var {
                break;
            } else {
                *c = 0;
            }
        }
        if self.counter.iter().all(|c| *c == 0) {
            self.done = true;
        }
        Some(&self.sample)
    }
}

/**
Helper function to evaluate the tree with randomly sampled variable values and
compare the result to the one returned by the `expectedfn` for the same
inputs. The values must be within `eps` of each other.

Each variable is sampled within the range indicated by the corresponding entry
in `vardata`. Each entry in vardata consists of the name of the variable, lower
bound and upper bound.
*/
pub fn check_tree_eval<F>(
    tree: Tree,
    mut expectedfn: F,
    vardata: &[(&str, f64, f64)],
    samples_per_var: usize,
    eps: f64,
) where
    F: FnMut(&[f64]) -> f64,
{
    let mut eval = Evaluator::new(&tree);
    let mut sampler = Sampler::new(vardata, samples_per_var, 42);
    let mut env = Environment::new();
    while let Some(sample) = sampler.next() {
        for (&(name, ..), &value) in vardata.iter().zip(sample.iter()) {
            env.set(name, value);
        }
        let result = eval.run(&env).unwrap();
        let expected = expectedfn(sample);
        assert_float_eq!(expected, result, eps, sample);
    }
}

/// Compare `tree1` and `tree2` by evaluating them at randomly sampled
/// values. The `vardata` slice is expected to contain tuples in the format
/// (name, min, max), where the name is that of a variable in the tree,
/// and [min, max] represents the range from which the values for that
/// variable can be randomly sampled. Each variable will be sampled
/// `samples_per_var` times, and the trees will be compared at all
/// combinations of samples. That means, if the trees contain 2 variables
/// each and `samples_per_var` is 20, then the trees will be evaluated and
/// compared with 20 ^ 2 = 400 different samples. This test asserts that the
/// values of the two trees not differ by more than `eps` at all the
/// samples.
pub fn compare_trees(
    tree1: &Tree,
    tree2: &Tree,
    vardata: &[(&str, f64, f64)],
    samples_per_var: usize,
    eps: f64,
) {
    let mut eval1 = Evaluator::new(tree1);
    let mut eval2 = Evaluator::new(tree2);
    let mut sampler = Sampler::new(vardata, samples_per_var, 42);
    let mut env = Environment::new();
    while let Some(sample) = sampler.next() {
        for (&(name, ..), &value) in vardata.iter().zip(sample.iter()) {
            env.set(name, value);
        }
        let result1 = eval1.run(&env).unwrap();
        let result2 = eval2.run(&env).unwrap();
        assert_float_eq!(result1, result2, eps, sample);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn t_sampler_covers_all_combinations() {
        let mut sampler = Sampler::new(&[("x", 0., 1.), ("y", -1., 0.)], 3, 42);
        let mut samples = Vec::new();
        while let Some(sample) = sampler.next() {
            assert!((0. ..1.).contains(&sample[0]));
            assert!((-1. ..0.).contains(&sample[1]));
            samples.push(sample.to_vec());
        }
        assert_eq!(samples.len(), 9);
        samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
        samples.dedup();
        assert_eq!(samples.len(), 9);
    }

    #[test]
    fn t_sampler_is_seeded() {
        let mut a = Sampler::new(&[("x", -5., 5.)], 10, 7);
        let mut b = Sampler::new(&[("x", -5., 5.)], 10, 7);
        while let Some(sa) = a.next() {
            let sa = sa.to_vec();
            assert_eq!(Some(sa.as_slice()), b.next());
        }
        assert_eq!(b.next(), None);
    }
}
