//! Employee — the entity one upstream directory record maps into.
//!
//! Every field is optional: a record that omits a field maps to an unset
//! field rather than a deserialisation error, and unknown upstream fields
//! are ignored. Validity is advisory — an incomplete entity is still
//! returned by the client and exposed via [`Employee::is_valid`].

use serde::{Deserialize, Serialize};

/// One employee record, fields copied verbatim from the upstream JSON.
///
/// The date fields are opaque display strings in whatever format the
/// upstream source uses; this layer never parses them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Employee {
  /// Opaque identifier, unique within a collection. Lookup key and, in
  /// encoded form, the URL token.
  pub id:               Option<String>,
  pub first_name:       Option<String>,
  pub last_name:        Option<String>,
  /// Free-form, descriptive only.
  pub gender:           Option<String>,
  pub occupation:       Option<String>,
  pub date_of_birth:    Option<String>,
  pub employment_date:  Option<String>,
  pub termination_date: Option<String>,
}

fn filled(field: &Option<String>) -> bool {
  field.as_deref().is_some_and(|s| !s.is_empty())
}

impl Employee {
  /// True iff first name, last name, and occupation are all present and
  /// non-empty. An entity failing this is structurally present but
  /// semantically incomplete (a placeholder or malformed upstream record).
  pub fn is_valid(&self) -> bool {
    filled(&self.first_name) && filled(&self.last_name) && filled(&self.occupation)
  }

  /// Display name assembled from whichever name fields are set.
  pub fn full_name(&self) -> String {
    let mut parts = Vec::new();
    if let Some(first) = self.first_name.as_deref().filter(|s| !s.is_empty()) {
      parts.push(first);
    }
    if let Some(last) = self.last_name.as_deref().filter(|s| !s.is_empty()) {
      parts.push(last);
    }
    parts.join(" ")
  }
}

#[cfg(test)]
mod tests {
  use super::Employee;

  fn complete() -> Employee {
    Employee {
      id: Some("1".into()),
      first_name: Some("Ada".into()),
      last_name: Some("Lovelace".into()),
      gender: Some("female".into()),
      occupation: Some("Engineer".into()),
      ..Default::default()
    }
  }

  #[test]
  fn complete_record_is_valid() {
    assert!(complete().is_valid());
  }

  #[test]
  fn missing_required_field_is_invalid() {
    let strips: [fn(&mut Employee); 3] = [
      |e| e.first_name = None,
      |e| e.last_name = None,
      |e| e.occupation = None,
    ];
    for strip in strips {
      let mut e = complete();
      strip(&mut e);
      assert!(!e.is_valid());
    }
  }

  #[test]
  fn empty_required_field_is_invalid() {
    let mut e = complete();
    e.occupation = Some(String::new());
    assert!(!e.is_valid());
  }

  #[test]
  fn validity_ignores_other_fields() {
    let mut e = complete();
    e.id = None;
    e.gender = None;
    e.date_of_birth = None;
    assert!(e.is_valid());
  }

  #[test]
  fn deserialises_pascal_case_and_tolerates_extras() {
    let e: Employee = serde_json::from_value(serde_json::json!({
      "Id": "42",
      "FirstName": "Grace",
      "LastName": "Hopper",
      "Occupation": "Rear Admiral",
      "FavouriteColour": "blue"
    }))
    .unwrap();
    assert_eq!(e.id.as_deref(), Some("42"));
    assert_eq!(e.first_name.as_deref(), Some("Grace"));
    assert!(e.gender.is_none());
    assert!(e.is_valid());
  }

  #[test]
  fn full_name_skips_unset_parts() {
    let mut e = complete();
    assert_eq!(e.full_name(), "Ada Lovelace");
    e.first_name = None;
    assert_eq!(e.full_name(), "Lovelace");
    e.last_name = Some(String::new());
    assert_eq!(e.full_name(), "");
  }
}
