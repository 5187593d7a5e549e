//! Useful algorithmic helpers used across the crate.
/// Boyer-Moore majority vote algorithm to find the majority element in a slice, if it exists.
///
/// The **majority element** is the value that appears
/// more than ⌊n/2⌋ times, where `n` is the length of the slice.
/// The [`harness`](crate::harness) uses it to elect the reference output
/// among the strategies it compares.
///
/// It runs in O(n) time and O(1) additional space: a first pass cancels out
/// pairs of different elements to find a candidate, a second pass counts
/// the candidate's occurrences.
///
/// # Examples
/// ```
/// use hashkit::algorithms::majority;
///
/// let outputs = [Some((0, 1)), Some((0, 1)), None];
/// assert_eq!(majority(&outputs), Some(&Some((0, 1))));
///
/// let nums = [1, 2, 3, 4];
/// assert_eq!(majority(&nums), None);
/// ```
pub fn majority<T: Eq>(a: &[T]) -> Option<&T> {
    let (candidate, _) = a.iter().fold((None, 0usize), |(cand, count), x| {
        if count == 0 {
            (Some(x), 1)
        } else if Some(x) == cand {
            (cand, count + 1)
        } else {
            (cand, count - 1)
        }
    });
    match candidate {
        Some(c) if a.iter().filter(|&v| v == c).count() > a.len() / 2 => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::majority;

    #[test]
    fn empty_has_no_majority() {
        let a: [u32; 0] = [];
        assert_eq!(majority(&a), None);
    }

    #[test]
    fn single_element_is_majority() {
        assert_eq!(majority(&[42u32]), Some(&42));
    }

    #[test]
    fn even_split_has_no_majority() {
        assert_eq!(majority(&[true, false]), None);
        assert_eq!(majority(&[1, 1, 2, 2]), None);
    }

    #[test]
    fn two_of_three_agree() {
        let outputs = [vec![1, 2], vec![1, 3], vec![1, 2]];
        assert_eq!(majority(&outputs), Some(&vec![1, 2]));
    }

    #[test]
    fn late_burst_wins() {
        let mut v = Vec::new();
        for _ in 0..500 {
            v.push(1u32);
            v.push(2u32);
        }
        v.extend(std::iter::repeat_n(2u32, 501));
        assert_eq!(majority(&v), Some(&2));
    }
}
