use std::collections::{BTreeSet, HashMap};

/// Ordered set of distinct labels. A label's position is its column offset
/// inside the owning segment of a feature vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build from any label stream. Labels are deduplicated and sorted, so the
    /// column layout does not depend on catalog row order.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let distinct: BTreeSet<String> = labels
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect();
        let labels: Vec<String> = distinct.into_iter().collect();
        let index = labels.iter().enumerate().map(|(i, l)| (l.clone(), i)).collect();
        Self { labels, index }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Set a 1.0 in `segment` for every known label; repeats land on the same
    /// column. Returns the labels that are not in the vocabulary.
    pub(crate) fn mark<'a, I>(&self, labels: I, segment: &mut [f32]) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        debug_assert_eq!(segment.len(), self.len());
        let mut unknown = Vec::new();
        for label in labels {
            match self.position(label) {
                Some(i) => segment[i] = 1.0,
                None => unknown.push(label),
            }
        }
        unknown
    }
}

/// Which block of the concatenated vector a vocabulary owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Modes,
    Languages,
    Genres,
}

impl Segment {
    pub fn name(self) -> &'static str {
        match self {
            Segment::Modes => "mode",
            Segment::Languages => "language",
            Segment::Genres => "genre",
        }
    }
}

/// The three vocabularies, laid out as modes, then languages, then genres.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabularies {
    pub modes: Vocabulary,
    pub languages: Vocabulary,
    pub genres: Vocabulary,
}

impl Vocabularies {
    pub fn dim(&self) -> usize {
        self.modes.len() + self.languages.len() + self.genres.len()
    }

    pub fn get(&self, segment: Segment) -> &Vocabulary {
        match segment {
            Segment::Modes => &self.modes,
            Segment::Languages => &self.languages,
            Segment::Genres => &self.genres,
        }
    }

    /// Column range of `segment` inside a full vector.
    pub fn range(&self, segment: Segment) -> std::ops::Range<usize> {
        let modes_end = self.modes.len();
        let languages_end = modes_end + self.languages.len();
        match segment {
            Segment::Modes => 0..modes_end,
            Segment::Languages => modes_end..languages_end,
            Segment::Genres => languages_end..self.dim(),
        }
    }

    /// Fill the `segment` block of `vector` from `labels`; returns unknown labels.
    pub(crate) fn mark<'a, I>(
        &self,
        segment: Segment,
        labels: I,
        vector: &mut [f32],
    ) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let range = self.range(segment);
        self.get(segment).mark(labels, &mut vector[range])
    }
}
