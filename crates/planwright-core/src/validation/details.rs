//! Details step: name, description and package details.

use super::{bounds, check_text, PackageDetailsErrors, ValidationErrors};
use crate::models::{PackageDetails, PlanDraft};

/// Validate everything entered on the Details step.
pub fn validate_details(draft: &PlanDraft) -> ValidationErrors {
    let package_errors = validate_package_details(&draft.package_details);

    ValidationErrors {
        name: check_text(&draft.name, bounds::NAME, "Package name is required."),
        description: check_text(
            &draft.description,
            bounds::DESCRIPTION,
            "Description is required.",
        ),
        package_details: (!package_errors.is_empty()).then_some(package_errors),
        ..Default::default()
    }
}

fn validate_package_details(details: &PackageDetails) -> PackageDetailsErrors {
    PackageDetailsErrors {
        target_market: details
            .target_market
            .is_empty()
            .then(|| "Select at least one target market.".to_string()),
        price: check_price(details),
        duration: check_duration(details),
        benefits: check_text(
            &details.benefits,
            bounds::BENEFITS,
            "Benefits are required.",
        ),
        selling_points: check_text(
            &details.selling_points,
            bounds::SELLING_POINTS,
            "Key selling points are required.",
        ),
    }
}

fn check_price(details: &PackageDetails) -> Option<String> {
    match details.price.as_f64() {
        Some(price) if price >= 0.0 => None,
        _ => Some("Price must be a valid non-negative number.".to_string()),
    }
}

fn check_duration(details: &PackageDetails) -> Option<String> {
    let magnitude = &details.duration.magnitude;
    if magnitude.is_empty() {
        return Some("Duration is required.".to_string());
    }
    match magnitude.as_whole() {
        Some(n) if (1..=bounds::MAX_DURATION).contains(&n) => None,
        _ => Some(format!(
            "Duration must be a whole number between 1 and {}.",
            bounds::MAX_DURATION
        )),
    }
}
