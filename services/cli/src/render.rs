use housing_match::matching::MatchResult;

/// Print the ranked matches in the survey's report layout.
pub(crate) fn render_matches(matches: &[MatchResult<'_>]) {
    println!("\n=== Top {} Suggested Housing Options ===", matches.len());

    if matches.is_empty() {
        println!("No agencies in the catalog to match against.");
        return;
    }

    for (index, result) in matches.iter().enumerate() {
        let agency = result.agency;
        println!("\n#{}: {}", index + 1, agency.organization());
        println!("   Score: {}", result.score);
        println!("   Phone: {}", agency.phone());
        println!("   Address: {}", agency.address());
        println!(
            "   Rent range: ${} - ${}",
            agency.min_rent(),
            agency.max_rent()
        );
        println!("   Bedrooms: {}", agency.bedrooms_label());
        println!("   Pet friendly: {}", agency.pet_friendly_label());
        println!("   Notes: {}", agency.notes());
        println!("   Why this matched:");
        for reason in &result.reasons {
            println!("    - {reason}");
        }
    }
}
