use estimator_core::models::Resolution;

pub(super) fn resolve(flag: bool, when_true: f64, when_false: f64) -> (Resolution, f64) {
    let days = if flag { when_true } else { when_false };
    (Resolution::Flag { value: flag }, days)
}
