//! End-to-end scenarios over chains built the way a rule engine would
//! build them, checked against the exact representation strings the
//! surrounding tooling depends on.

use coref_chains::{Chain, ChainCollection, Document, Mention};

fn chain(position_lists: &[&[usize]], most_specific: usize) -> Chain {
    let mentions: Vec<Mention> = position_lists
        .iter()
        .map(|ps| Mention::new(ps.to_vec(), ps.len() > 1).unwrap())
        .collect();
    let scores: Vec<f64> = (0..mentions.len())
        .map(|i| if i == most_specific { 2.0 } else { 1.0 })
        .collect();
    Chain::new(mentions, &scores).unwrap()
}

fn doc(text: &str, chains: Vec<Chain>) -> Document {
    Document::new(
        text.split_whitespace().map(String::from).collect(),
        ChainCollection::new(chains),
    )
}

#[test]
fn coordinated_subject_document() {
    let doc = doc(
        "Richard and Peter said they had finished",
        vec![chain(&[&[0, 2], &[4]], 0)],
    );

    assert_eq!(doc.coref_chains().to_string(), "[0: [0, 2], [4]]");
    assert_eq!(doc.coref_chains()[0].to_string(), "0: [0, 2], [4]");
    assert_eq!(doc.coref_chains()[0][0].to_string(), "[0, 2]");
    assert_eq!(doc.coref_chains()[0][1].to_string(), "[4]");
    assert_eq!(
        doc.coref_chains()[0][0].pretty(&doc),
        "[Richard(0); Peter(2)]"
    );
    assert_eq!(
        doc.coref_chains()[0].pretty(&doc),
        "0: [Richard(0); Peter(2)], they(4)"
    );
    assert_eq!(doc.coref_chains()[0].most_specific_index(), 0);

    assert_eq!(doc.resolve(4), Some(vec![0, 2]));
    assert_eq!(doc.resolve(0), None);
    assert_eq!(doc.resolve(2), None);
}

#[test]
fn two_chain_document() {
    let doc = doc(
        "I saw Peter . Richard and he came in . They had arrived",
        vec![chain(&[&[2], &[6]], 0), chain(&[&[4, 6], &[10]], 0)],
    );

    assert_eq!(doc.coref_chains().len(), 2);
    assert_eq!(
        doc.coref_chains().to_string(),
        "[0: [2], [6], 1: [4, 6], [10]]"
    );
    assert_eq!(
        doc.pretty_chains(),
        "0: Peter(2), he(6); 1: [Richard(4); he(6)], They(10)"
    );
    assert_eq!(doc.coref_chains()[0].most_specific_index(), 0);
    assert_eq!(doc.coref_chains()[1].most_specific_index(), 0);

    // "They" unions Richard with the resolution of "he".
    assert_eq!(doc.resolve(10), Some(vec![2, 4]));
    assert_eq!(doc.resolve(4), None);
    assert_eq!(doc.resolve(6), Some(vec![2]));
}

#[test]
fn token_scoped_views() {
    let doc = doc(
        "I saw Peter . Richard and he came in . They had arrived",
        vec![chain(&[&[2], &[6]], 0), chain(&[&[4, 6], &[10]], 0)],
    );

    // Token 6 sits in both chains.
    let both = doc.token_chains(6);
    assert_eq!(both.to_string(), "[0: [2], [6], 1: [4, 6], [10]]");
    assert_eq!(
        both.pretty(&doc),
        "0: Peter(2), he(6); 1: [Richard(4); he(6)], They(10)"
    );

    let first = doc.token_chains(2);
    assert_eq!(first.to_string(), "[0: [2], [6]]");
    assert_eq!(first.pretty(&doc), "0: Peter(2), he(6)");

    let second = doc.token_chains(10);
    assert_eq!(second.to_string(), "[1: [4, 6], [10]]");
    assert_eq!(second.pretty(&doc), "1: [Richard(4); he(6)], They(10)");

    // A token in no chain yields an empty view and no antecedent.
    assert!(doc.token_chains(8).is_empty());
    assert_eq!(doc.resolve(8), None);
}

#[test]
fn object_access() {
    let doc = doc(
        "I saw Peter . Richard and he came in . They had arrived",
        vec![chain(&[&[2], &[6]], 0), chain(&[&[4, 6], &[10]], 0)],
    );
    let chains = doc.coref_chains();

    assert_eq!(chains[1].to_string(), "1: [4, 6], [10]");
    assert_eq!(chains.len(), 2);
    assert_eq!(chains[1].len(), 2);
    assert_eq!(chains[1][0].to_string(), "[4, 6]");
    assert_eq!(chains[1][0].len(), 2);
    assert_eq!(chains[1][0][0], 4);

    let they = Mention::single(10);
    let found = chains
        .iter()
        .flat_map(Chain::mentions)
        .any(|m| *m == they);
    assert!(found);
}

#[test]
fn cataphora() {
    let doc = doc(
        "Although he had gone out , Richard came back",
        vec![chain(&[&[1], &[6]], 1)],
    );

    assert_eq!(doc.coref_chains().to_string(), "[0: [1], [6]]");
    assert_eq!(doc.coref_chains()[0].most_specific_index(), 1);
    assert_eq!(doc.resolve(1), Some(vec![6]));
    assert_eq!(doc.resolve(6), None);
}

#[test]
fn definite_noun_antecedent() {
    // "I saw a big dog. The dog came in." with "dog" as the most
    // specific mention of the chain.
    let doc = doc(
        "I saw a big dog . The dog came in .",
        vec![chain(&[&[4], &[7]], 0)],
    );

    assert_eq!(doc.coref_chains().to_string(), "[0: [4], [7]]");
    assert_eq!(doc.resolve(7), Some(vec![4]));
    assert_eq!(doc.resolve(4), None);
}

#[test]
fn deep_recursive_resolution() {
    // "I spoke to Mr. Platt. The man and Richard came in.
    //  They and Peter said hello. They were all here."
    // The final "They" resolves through two coordinated mentions down to
    // Platt, Richard, and Peter.
    let doc = doc(
        "I spoke to Mr. Platt . The man and Richard came in . They and Peter said hello . They were all here .",
        vec![
            chain(&[&[4], &[7]], 0),
            chain(&[&[7, 9], &[13]], 0),
            chain(&[&[13, 15], &[19]], 0),
        ],
    );

    assert_eq!(doc.resolve(19), Some(vec![4, 9, 15]));
}

#[test]
fn serialization_round_trip() {
    let collection = ChainCollection::new(vec![
        chain(&[&[2], &[6]], 0),
        chain(&[&[4, 6], &[10]], 0),
    ]);

    let json = serde_json::to_string(&collection).unwrap();
    let restored: ChainCollection = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, collection);
    assert_eq!(restored.to_string(), collection.to_string());
    assert_eq!(restored.resolve(10), Some(vec![2, 4]));
}
