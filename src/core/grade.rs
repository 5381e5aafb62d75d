use crate::models::Grade;

/// Classify a match score
///
/// Bands are inclusive on their lower bound. No range check is done:
/// anything below 0 lands in `D` and anything above 100 in `S`.
pub fn grade_of(score: i32) -> Grade {
    if score >= 90 {
        Grade::S
    } else if score >= 80 {
        Grade::A
    } else if score >= 70 {
        Grade::B
    } else if score >= 60 {
        Grade::C
    } else {
        Grade::D
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(grade_of(100), Grade::S);
        assert_eq!(grade_of(90), Grade::S);
        assert_eq!(grade_of(89), Grade::A);
        assert_eq!(grade_of(80), Grade::A);
        assert_eq!(grade_of(79), Grade::B);
        assert_eq!(grade_of(70), Grade::B);
        assert_eq!(grade_of(69), Grade::C);
        assert_eq!(grade_of(60), Grade::C);
        assert_eq!(grade_of(59), Grade::D);
        assert_eq!(grade_of(0), Grade::D);
    }

    #[test]
    fn test_out_of_range_scores() {
        assert_eq!(grade_of(-20), Grade::D);
        assert_eq!(grade_of(250), Grade::S);
    }

    #[test]
    fn test_labels() {
        assert_eq!(grade_of(95).label(), "perfect match");
        assert_eq!(grade_of(85).label(), "very good");
        assert_eq!(grade_of(75).label(), "good");
        assert_eq!(grade_of(65).label(), "fair");
        assert_eq!(grade_of(10).label(), "low");
    }
}
