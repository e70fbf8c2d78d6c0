// tests/filter_properties.rs

use proptest::prelude::*;

use bootrun::dependency::{
    Artifact, ArtifactFilter, DependencySet, FilterChain, FilterableDependency,
};

const GROUPS: &[&str] = &["org.alpha", "org.beta", "com.gamma", "io.delta"];
const SCOPES: &[&str] = &["compile", "runtime", "provided", "test"];

fn artifact_strategy() -> impl Strategy<Value = Artifact> {
    (0..GROUPS.len(), 0..6usize, 0..SCOPES.len()).prop_map(|(g, a, s)| {
        Artifact::new(GROUPS[g], format!("lib-{a}"))
            .with_scope(SCOPES[s])
            .with_file(format!("/repo/{}/lib-{a}.jar", GROUPS[g]))
    })
}

fn deps_strategy() -> impl Strategy<Value = DependencySet> {
    proptest::collection::vec(artifact_strategy(), 0..20)
        .prop_map(|artifacts| artifacts.into_iter().collect())
}

fn identity_strategy() -> impl Strategy<Value = FilterableDependency> {
    (0..GROUPS.len(), 0..6usize)
        .prop_map(|(g, a)| FilterableDependency::new(GROUPS[g], format!("lib-{a}")))
}

fn filter_strategy() -> impl Strategy<Value = ArtifactFilter> {
    prop_oneof![
        proptest::collection::vec(0..GROUPS.len(), 0..3).prop_map(|idx| {
            ArtifactFilter::MatchingGroupId(idx.into_iter().map(|i| GROUPS[i].to_string()).collect())
        }),
        proptest::collection::vec(identity_strategy(), 1..4).prop_map(ArtifactFilter::Include),
        proptest::collection::vec(identity_strategy(), 1..4).prop_map(ArtifactFilter::Exclude),
    ]
}

fn chain_strategy() -> impl Strategy<Value = FilterChain> {
    proptest::collection::vec(filter_strategy(), 0..4).prop_map(|filters| {
        let mut chain = FilterChain::new();
        for f in filters {
            chain.push(f);
        }
        chain
    })
}

proptest! {
    #[test]
    fn output_is_an_ordered_subset(deps in deps_strategy(), chain in chain_strategy()) {
        let filtered = chain.filter(&deps).unwrap();
        prop_assert!(filtered.len() <= deps.len());

        // Relative order of the input is preserved.
        let mut input = deps.iter();
        for kept in &filtered {
            prop_assert!(input.any(|a| a == kept));
        }
    }

    #[test]
    fn kept_iff_no_predicate_excludes(deps in deps_strategy(), chain in chain_strategy()) {
        let filtered = chain.filter(&deps).unwrap();
        for artifact in &deps {
            let kept = filtered.contains(artifact.key());
            let excluded = chain.filters().iter().any(|f| f.excludes(artifact));
            prop_assert_eq!(kept, !excluded);
        }
    }

    #[test]
    fn exclude_all_empties_the_set(deps in deps_strategy()) {
        let all: Vec<FilterableDependency> = deps
            .iter()
            .map(|a| FilterableDependency::new(a.group_id(), a.artifact_id()))
            .collect();
        let chain = FilterChain::new().with(ArtifactFilter::Exclude(all));
        prop_assert!(chain.filter(&deps).unwrap().is_empty());
    }

    #[test]
    fn group_id_csv_whitespace_is_irrelevant(
        deps in deps_strategy(),
        picks in proptest::collection::vec(0..GROUPS.len(), 1..4),
        pad in "[ ]{0,3}",
    ) {
        let tight = picks.iter().map(|&i| GROUPS[i]).collect::<Vec<_>>().join(",");
        let loose = picks
            .iter()
            .map(|&i| format!("{pad}{}{pad}", GROUPS[i]))
            .collect::<Vec<_>>()
            .join(",");

        let a = FilterChain::new().with(ArtifactFilter::matching_group_ids(&tight));
        let b = FilterChain::new().with(ArtifactFilter::matching_group_ids(&loose));
        prop_assert_eq!(a.filter(&deps).unwrap(), b.filter(&deps).unwrap());
    }
}
