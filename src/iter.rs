use crate::core::SeqVec;

/// Iterator over elements in a `SeqVec`
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct SeqVecIter<'a, T> {
    seq: &'a SeqVec<T>,
    current: usize,
}

impl<'a, T> Iterator for SeqVecIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.seq.len() {
            let result = self.seq.at(self.current).ok();
            self.current += 1;
            result
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.len() - self.current;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for SeqVecIter<'_, T> {}

impl<'a, T> IntoIterator for &'a SeqVec<T> {
    type Item = &'a T;
    type IntoIter = SeqVecIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        SeqVecIter {
            seq: self,
            current: 0,
        }
    }
}
