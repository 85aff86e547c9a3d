use crate::people::controls::{
    all_centuries, century_toggled, query_changed, reset_filters, sex_selected, sort_toggled,
};
use crate::people::{Sex, SortField};
use crate::search::{ParamValue, SearchParams};

#[test]
fn parses_repeated_and_encoded_values() {
    let params = SearchParams::parse("?query=ann+m%C3%BCller&centuries=18&centuries=19&sex=f");

    assert_eq!(params.get("query"), Some("ann müller"));
    assert_eq!(params.get("sex"), Some("f"));
    assert_eq!(params.get("centuries"), Some("18"));
    assert_eq!(params.get_all("centuries"), ["18", "19"]);
    assert_eq!(params.get("sort"), None);
    assert!(params.get_all("sort").is_empty());
}

#[test]
fn empty_query_string() {
    assert!(SearchParams::parse("").is_empty());
    assert!(SearchParams::parse("?").is_empty());
    assert_eq!(SearchParams::parse("").to_string(), "");
}

#[test]
fn displays_in_insertion_order() {
    let params: SearchParams = [("query", "ann m"), ("centuries", "18"), ("centuries", "19")]
        .into_iter()
        .collect();
    assert_eq!(params.to_string(), "query=ann+m&centuries=18&centuries=19");
    assert_eq!(SearchParams::from(params.to_string().as_str()), params);
}

#[test]
fn with_keeps_untouched_keys() {
    let params = SearchParams::parse("query=a&centuries=18&sex=m&centuries=19&sort=name");

    assert_eq!(
        params.with([("sex", ParamValue::Clear)]).to_string(),
        "query=a&centuries=18&centuries=19&sort=name"
    );
    assert_eq!(
        params.with([("centuries", ParamValue::One("20".into()))]).to_string(),
        "query=a&centuries=20&sex=m&sort=name"
    );
    assert_eq!(
        params
            .with([("centuries", ParamValue::Many(vec!["17".into(), "18".into()]))])
            .to_string(),
        "query=a&sex=m&sort=name&centuries=17&centuries=18"
    );
    assert_eq!(
        params.with([("centuries", ParamValue::Many(vec![]))]).to_string(),
        "query=a&sex=m&sort=name"
    );
    assert_eq!(
        params.with([("order", ParamValue::One("desc".into()))]).to_string(),
        "query=a&centuries=18&sex=m&centuries=19&sort=name&order=desc"
    );
    // the receiver is left as it was
    assert_eq!(params.get_all("centuries"), ["18", "19"]);
}

#[test]
fn text_value_clears_when_empty() {
    assert_eq!(ParamValue::text(""), ParamValue::Clear);
    assert_eq!(ParamValue::text("x"), ParamValue::One("x".into()));
    assert_eq!(ParamValue::from(None), ParamValue::Clear);
}

#[test]
fn query_input_sets_or_removes_query() {
    let params = SearchParams::parse("sex=f&query=old");
    assert_eq!(query_changed(&params, "new").to_string(), "sex=f&query=new");
    assert_eq!(query_changed(&params, "").to_string(), "sex=f");
}

#[test]
fn sex_tabs() {
    let params = SearchParams::parse("query=a");
    assert_eq!(sex_selected(&params, Some(Sex::Male)).to_string(), "query=a&sex=m");
    let female = sex_selected(&params, Some(Sex::Female));
    assert_eq!(female.to_string(), "query=a&sex=f");
    assert_eq!(sex_selected(&female, None).to_string(), "query=a");
}

#[test]
fn century_buttons_toggle_membership() {
    let params = SearchParams::parse("query=a&centuries=18&centuries=19");

    assert_eq!(century_toggled(&params, 18).to_string(), "query=a&centuries=19");
    assert_eq!(
        century_toggled(&params, 20).to_string(),
        "query=a&centuries=18&centuries=19&centuries=20"
    );
    assert_eq!(
        century_toggled(&century_toggled(&params, 19), 19).get_all("centuries"),
        ["18", "19"]
    );
    assert_eq!(all_centuries(&params).to_string(), "query=a");
}

#[test]
fn header_links_cycle_sort_and_keep_filters() {
    let unsorted = SearchParams::parse("query=a");

    let asc = sort_toggled(&unsorted, SortField::Name);
    assert_eq!(asc.to_string(), "query=a&sort=name");

    let desc = sort_toggled(&asc, SortField::Name);
    assert_eq!(desc.to_string(), "query=a&sort=name&order=desc");

    assert_eq!(sort_toggled(&desc, SortField::Name), unsorted);

    // another column restarts ascending
    assert_eq!(
        sort_toggled(&desc, SortField::Born).to_string(),
        "query=a&sort=born"
    );
}

#[test]
fn reset_clears_everything() {
    assert!(reset_filters().is_empty());
}
