use rand::distr::weighted::WeightedIndex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    rules::face::Face,
    statistics::roller::Roller,
};

/// A weighted die with a fixed set of distinct faces.
///
/// The face set is fixed at construction and every weight starts at 1.0.
/// Weights may be retuned at any time with [`Die::set_weight`]; on each roll
/// a face comes up with probability `weight / total_weight`, where the total
/// is taken at the time of the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Die {
    faces: Vec<Face>,
    weights: Vec<f64>,
}

impl Die {
    /// Builds a die from a sequence of faces.
    ///
    /// The faces must be non-empty, all of one [`FaceKind`], and pairwise
    /// distinct. Note that distinctness follows [`Face`] equality, so
    /// `Int(2)` and `Real(2.0)` count as the same face.
    ///
    /// [`FaceKind`]: crate::rules::face::FaceKind
    pub fn new<I, F>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<Face>,
    {
        let faces: Vec<Face> = faces.into_iter().map(Into::into).collect();
        let Some(first) = faces.first() else {
            return Err(Error::EmptyFaceList);
        };
        let expected = first.kind();
        let mut seen = FxHashSet::default();
        for face in &faces {
            if face.kind() != expected {
                return Err(Error::MixedFaceKinds {
                    expected,
                    found: face.kind(),
                });
            }
            if !seen.insert(face.clone()) {
                return Err(Error::DuplicateFace(face.clone()));
            }
        }
        let weights = vec![1.0; faces.len()];
        Ok(Self { faces, weights })
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// The die's faces, in construction order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The current weight of one face, if it is on the die.
    pub fn weight(&self, face: &Face) -> Option<f64> {
        self.position(face).map(|index| self.weights[index])
    }

    fn position(&self, face: &Face) -> Option<usize> {
        self.faces.iter().position(|f| f == face)
    }

    /// Replaces the weight of one face, leaving all others untouched.
    pub fn set_weight(&mut self, face: &Face, new_weight: f64) -> Result<()> {
        let index = self
            .position(face)
            .ok_or_else(|| Error::UnknownFace(face.clone()))?;
        if !new_weight.is_finite() || new_weight < 0.0 {
            return Err(Error::InvalidWeight(new_weight));
        }
        log::debug!(
            "weight of face {} changed from {} to {}",
            face,
            self.weights[index],
            new_weight
        );
        self.weights[index] = new_weight;
        Ok(())
    }

    /// An owned snapshot of the die's faces and current weights, in
    /// construction order. Mutating the snapshot does not affect the die.
    pub fn state(&self) -> Vec<(Face, f64)> {
        self.faces
            .iter()
            .cloned()
            .zip(self.weights.iter().copied())
            .collect()
    }

    /// The normalized draw probability of each face, in construction order.
    pub fn face_probabilities(&self) -> Result<Vec<f64>> {
        let total: f64 = self.weights.iter().sum();
        if total <= 0.0 {
            return Err(Error::AllWeightsZero);
        }
        Ok(self.weights.iter().map(|w| w / total).collect())
    }

    fn sampler(&self) -> Result<WeightedIndex<f64>> {
        if self.weights.iter().sum::<f64>() <= 0.0 {
            return Err(Error::AllWeightsZero);
        }
        WeightedIndex::new(&self.weights).map_err(|_| Error::AllWeightsZero)
    }

    /// Draws a single face.
    pub fn roll_once(&self, roller: &mut Roller) -> Result<Face> {
        let sampler = self.sampler()?;
        Ok(self.faces[roller.sample(&sampler)].clone())
    }

    /// Draws `times` faces with replacement, returned in draw order.
    ///
    /// The weights are fixed for the duration of one call; retuning between
    /// calls is fine.
    pub fn roll(&self, times: usize, roller: &mut Roller) -> Result<Vec<Face>> {
        if times == 0 {
            return Err(Error::InvalidRollCount);
        }
        let sampler = self.sampler()?;
        Ok((0..times)
            .map(|_| self.faces[roller.sample(&sampler)].clone())
            .collect())
    }
}
