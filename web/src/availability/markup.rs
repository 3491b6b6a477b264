pub const FORM_ID: &str = "availabilityModalForm";
pub const DATES_CONTAINER_ID: &str = "reservation-dates-modal";
pub const START_DATE_ID: &str = "start_date";
pub const END_DATE_ID: &str = "end_date";

/// Two disabled date inputs; did-open enables them once the picker is attached.
pub fn date_range_form() -> String {
    format!(
        r#"<div class="container">
  <form id="{FORM_ID}" name="{FORM_ID}" action="" method="post" class="needs-validation" novalidate>
    <div class="row" id="{DATES_CONTAINER_ID}">
      <div class="col">
        <input required class="form-control" type="text" name="start_date" id="{START_DATE_ID}" placeholder="Arrival date" autocomplete="off" disabled>
      </div>
      <div class="col">
        <input required class="form-control" type="text" name="end_date" id="{END_DATE_ID}" placeholder="Departure date" autocomplete="off" disabled>
      </div>
    </div>
  </form>
</div>"#
    )
}

pub fn reserve_now_link(href: &str) -> String {
    format!(
        r#"<p><a href="{}" class="btn btn-primary mt-4">Reserve Now !</a></p>"#,
        escape_attribute(href)
    )
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
