//! FQDN normalization for domain and record names.

/// Record name addressing the zone apex.
pub const APEX: &str = "@";

/// Append a trailing `.` unless one is already present.
pub fn normalize_domain_name(raw: &str) -> String {
    if raw.ends_with('.') {
        raw.to_string()
    } else {
        format!("{raw}.")
    }
}

/// Qualify a record name under its zone and add the trailing dot.
///
/// `"@"` maps to the zone itself. Anything else is qualified unless it
/// already ends with the bare zone name, ignoring the record's own trailing
/// dot so that names coming back from the API normalize to themselves.
/// The check is a plain string suffix, not a label boundary: under
/// `example.com`, `notexample.com` is taken as already qualified.
pub fn normalize_record_name(domain_name: &str, raw_record_name: &str) -> String {
    if raw_record_name == APEX {
        return normalize_domain_name(domain_name);
    }

    let zone = domain_name.trim_end_matches('.');
    let name = raw_record_name.trim_end_matches('.');
    if name.ends_with(zone) {
        normalize_domain_name(name)
    } else {
        normalize_domain_name(&format!("{name}.{zone}"))
    }
}
