use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Square matrix of pairwise cosine similarities, indexed by catalog row.
///
/// Stored row-major. Symmetric, values in [-1, 1], with 1.0 on the diagonal
/// for any movie with at least one feature token. Built once at startup (or
/// offline) and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f32>,
}

impl SimilarityMatrix {
    /// Number of rows (== number of movies in the catalog at build time).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Returns the similarity row for movie `index`, or `None` when the
    /// index is out of bounds.
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.n {
            return None;
        }
        Some(&self.values[index * self.n..(index + 1) * self.n])
    }
}

/// TF-IDF vectorizer over whitespace/punctuation-delimited tokens.
///
/// Lowercases input, uses smoothed inverse document frequency
/// (`ln((1 + n) / (1 + df)) + 1`) and L2-normalizes each document row, the
/// conventional formulation for cosine-similarity pipelines.
#[derive(Debug, Default)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
}

/// A document as a sparse unit vector: `(term_index, weight)` pairs sorted
/// by term index.
type SparseRow = Vec<(usize, f32)>;

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct terms seen during `fit_transform`.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Learns the vocabulary and document frequencies from `documents` and
    /// returns one L2-normalized sparse row per document. Documents with no
    /// tokens produce an empty row (zero vector).
    pub fn fit_transform(&mut self, documents: &[String]) -> Vec<SparseRow> {
        let mut term_counts: Vec<HashMap<usize, usize>> = Vec::with_capacity(documents.len());
        let mut document_frequency: Vec<usize> = Vec::new();

        for document in documents {
            let mut counts: HashMap<usize, usize> = HashMap::new();
            for token in tokenize(document) {
                let next_index = self.vocabulary.len();
                let term = *self.vocabulary.entry(token).or_insert(next_index);
                if term == document_frequency.len() {
                    document_frequency.push(0);
                }
                *counts.entry(term).or_insert(0) += 1;
            }
            for &term in counts.keys() {
                document_frequency[term] += 1;
            }
            term_counts.push(counts);
        }

        let n_documents = documents.len() as f32;
        let idf: Vec<f32> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n_documents) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        term_counts
            .into_iter()
            .map(|counts| {
                let mut row: SparseRow = counts
                    .into_iter()
                    .map(|(term, count)| (term, count as f32 * idf[term]))
                    .collect();
                row.sort_unstable_by_key(|&(term, _)| term);
                l2_normalize(&mut row);
                row
            })
            .collect()
    }
}

/// Lowercased alphanumeric tokens; everything else is a delimiter.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
}

fn l2_normalize(row: &mut SparseRow) {
    let norm = row.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, weight) in row.iter_mut() {
            *weight /= norm;
        }
    }
}

/// Dot product of two sparse rows sorted by term index.
fn sparse_dot(a: &[(usize, f32)], b: &[(usize, f32)]) -> f32 {
    let mut dot = 0.0_f32;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot
}

/// Vectorizes `documents` with TF-IDF and computes the full pairwise cosine
/// similarity matrix. Rows are unit vectors, so cosine reduces to the dot
/// product; only the upper triangle is computed and mirrored.
pub fn build_matrix(documents: &[String]) -> SimilarityMatrix {
    let rows = TfidfVectorizer::new().fit_transform(documents);
    let n = rows.len();
    let mut values = vec![0.0_f32; n * n];

    for i in 0..n {
        for j in i..n {
            let similarity = sparse_dot(&rows[i], &rows[j]);
            values[i * n + j] = similarity;
            values[j * n + i] = similarity;
        }
    }

    SimilarityMatrix { n, values }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_row_bounds_checked() {
        let matrix = build_matrix(&docs(&["action hero", "romance drama"]));
        assert_eq!(matrix.len(), 2);
        assert!(matrix.row(1).is_some());
        assert!(matrix.row(2).is_none());
    }

    #[test]
    fn test_identical_documents_have_unit_similarity() {
        let matrix = build_matrix(&docs(&["space opera alien", "space opera alien"]));
        let row = matrix.row(0).unwrap();
        assert!((row[1] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_disjoint_documents_have_zero_similarity() {
        let matrix = build_matrix(&docs(&["heist thriller", "musical animation"]));
        assert_eq!(matrix.row(0).unwrap()[1], 0.0);
    }

    #[test]
    fn test_matrix_is_symmetric_with_unit_diagonal() {
        let matrix = build_matrix(&docs(&[
            "crime drama mafia",
            "crime thriller detective",
            "family animation",
        ]));
        for i in 0..3 {
            let row_i = matrix.row(i).unwrap();
            assert!((row_i[i] - 1.0).abs() < 1e-5);
            for j in 0..3 {
                assert!((row_i[j] - matrix.row(j).unwrap()[i]).abs() < 1e-6);
                assert!(row_i[j] >= -1.0 - 1e-6 && row_i[j] <= 1.0 + 1e-6);
            }
        }
    }

    #[test]
    fn test_overlap_scores_between_zero_and_one() {
        let matrix = build_matrix(&docs(&["action space hero", "action romance"]));
        let score = matrix.row(0).unwrap()[1];
        assert!(score > 0.0 && score < 1.0);
    }

    #[test]
    fn test_empty_document_is_zero_vector() {
        let matrix = build_matrix(&docs(&["western outlaw", ""]));
        let row = matrix.row(1).unwrap();
        assert_eq!(row[0], 0.0);
        assert_eq!(row[1], 0.0);
    }

    #[test]
    fn test_tokenizer_lowercases_and_splits_punctuation() {
        let tokens: Vec<String> = tokenize("Sci-Fi, Action!").collect();
        assert_eq!(tokens, vec!["sci", "fi", "action"]);
    }

    #[test]
    fn test_vectorizer_builds_vocabulary() {
        let mut vectorizer = TfidfVectorizer::new();
        let rows = vectorizer.fit_transform(&docs(&["alpha beta", "beta gamma"]));
        assert_eq!(vectorizer.vocabulary_len(), 3);
        assert_eq!(rows.len(), 2);
        // Rows are L2-normalized.
        for row in &rows {
            let norm: f32 = row.iter().map(|&(_, w)| w * w).sum();
            assert!((norm - 1.0).abs() < 1e-5);
        }
    }
}
