//! End-to-end behaviour through the public API.

use u_evolve::error::{ConfigError, Error, OperatorError};
use u_evolve::evolution::operators::{normal_mutation, permute_mutation, splice_mutation, uniform_mutation};
use u_evolve::evolution::{Deme, Population, PopulationConfig};
use u_evolve::random::create_rng;

fn sphere(genome: &[f64]) -> f64 {
    genome.iter().map(|x| x * x).sum()
}

fn rastrigin(genome: &[f64]) -> f64 {
    10.0 * genome.len() as f64
        + genome
            .iter()
            .map(|x| x * x - 10.0 * (2.0 * std::f64::consts::PI * x).cos())
            .sum::<f64>()
}

#[test]
fn normal_mutation_full_and_zero_rate() {
    let mut rng = create_rng(2024);
    let genome = [1.0, 2.0, 3.0];

    let mut all = genome;
    normal_mutation(&mut all, 1.0, 1.0, &mut rng).unwrap();
    assert!(all.iter().zip(&genome).all(|(a, b)| a != b));

    let mut none = genome;
    normal_mutation(&mut none, 0.0, 1.0, &mut rng).unwrap();
    assert_eq!(none, genome);
}

#[test]
fn uniform_mutation_stays_in_union() {
    let mut rng = create_rng(2024);
    let mut genome = vec![1, 2, 3];
    uniform_mutation(&mut genome, &[4, 5, 6], 3, &mut rng).unwrap();
    assert_eq!(genome.len(), 3);
    assert!(genome.iter().all(|g| [1, 2, 3, 4, 5, 6].contains(g)));
}

#[test]
fn permutation_operators_keep_multiset_for_every_gene_type() {
    let mut rng = create_rng(1);

    let mut floats: Vec<f64> = vec![1.0, 2.0, 3.0];
    permute_mutation(&mut floats, 3, &mut rng).unwrap();
    splice_mutation(&mut floats, &mut rng).unwrap();
    floats.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(floats, vec![1.0, 2.0, 3.0]);

    let mut ints = vec![1, 2, 3];
    permute_mutation(&mut ints, 3, &mut rng).unwrap();
    splice_mutation(&mut ints, &mut rng).unwrap();
    ints.sort();
    assert_eq!(ints, vec![1, 2, 3]);

    let mut words = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    permute_mutation(&mut words, 3, &mut rng).unwrap();
    splice_mutation(&mut words, &mut rng).unwrap();
    words.sort();
    assert_eq!(words, vec!["a", "b", "c"]);
}

#[test]
fn degenerate_genomes_are_errors() {
    let mut rng = create_rng(1);
    let mut empty: Vec<f64> = Vec::new();
    assert_eq!(
        normal_mutation(&mut empty, 0.5, 1.0, &mut rng),
        Err(OperatorError::EmptyGenome)
    );
    let mut one = vec![1.0];
    assert!(splice_mutation(&mut one, &mut rng).is_err());
    assert!(permute_mutation(&mut one, 1, &mut rng).is_err());
}

#[test]
fn sphere_run_improves_after_first_generation() {
    let config = PopulationConfig::default()
        .with_demes(1)
        .with_individuals(30)
        .with_seed(5);
    let mut population = Population::initialize(config, sphere, 5).unwrap();

    population.enhance().unwrap();
    let after_first = population.best().fitness;
    for _ in 1..50 {
        population.enhance().unwrap();
    }

    assert_eq!(population.generation(), 50);
    assert!(
        population.best().fitness < after_first,
        "expected {} < {}",
        population.best().fitness,
        after_first
    );
}

#[test]
fn multi_deme_best_ratchets() {
    let config = PopulationConfig::default()
        .with_demes(4)
        .with_individuals(20)
        .with_boundary(5.12)
        .with_seed(17);
    let mut population = Population::initialize(config, rastrigin, 8).unwrap();
    let result = population.evolve(40).unwrap();

    for window in result.fitness_history.windows(2) {
        assert!(window[1] <= window[0]);
    }
    let leaders = population
        .demes()
        .iter()
        .map(|d| d.leader().unwrap().fitness)
        .fold(f64::INFINITY, f64::min);
    assert!(result.best_fitness <= leaders);
    assert_eq!(result.best.genome.len(), 8);
}

#[test]
fn invalid_configuration_fails_fast() {
    let result = Population::initialize(PopulationConfig::default().with_rate(1.5), sphere, 3);
    assert!(matches!(
        result.err(),
        Some(Error::Config(ConfigError::RateOutOfRange(_)))
    ));

    let result = Population::initialize(PopulationConfig::default().with_contestants(0), sphere, 3);
    assert!(matches!(
        result.err(),
        Some(Error::Config(ConfigError::ZeroContestants))
    ));
}

#[test]
fn deme_generation_by_hand() {
    let config = PopulationConfig::default().with_couples(4).with_offsprings(3);
    let mut rng = create_rng(99);
    let mut deme = Deme::new(config.individuals);
    deme.initialize(3, config.boundary, &mut rng).unwrap();
    deme.evaluate(&sphere).unwrap();

    deme.crossover(config.couples, config.offsprings, &mut rng).unwrap();
    assert_eq!(deme.individuals().len(), config.crossed_size());
    deme.mutate(config.rate, config.std_dev, &mut rng).unwrap();
    deme.evaluate(&sphere).unwrap();
    deme.tournament(config.contestants, &mut rng).unwrap();
    assert_eq!(deme.individuals().len(), config.individuals);
    deme.sort();
    let leader = deme.leader().unwrap().fitness;
    assert!(deme.individuals().iter().all(|i| i.fitness >= leader));
}
