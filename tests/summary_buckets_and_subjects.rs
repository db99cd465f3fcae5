use serde_json::{json, Value};

use kursus_core::api::Request;

fn call(method: &str, params: Value) -> Value {
    kursus_core::handle_request(&Request {
        id: "t".to_string(),
        method: method.to_string(),
        params,
    })
}

fn result_ok(resp: &Value) -> &Value {
    assert_eq!(
        resp.get("ok").and_then(Value::as_bool),
        Some(true),
        "call failed: {}",
        resp
    );
    resp.get("result").expect("result")
}

#[test]
fn monthly_series_always_covers_the_calendar() {
    let resp = call(
        "summary.get",
        json!({
            "attendance": [
                { "date": "2024-01-08T00:00:00Z", "status": "Present" },
                { "date": "2024-01-09T00:00:00Z", "status": "Absent" },
                { "date": "2024-06-03T00:00:00Z", "status": "Late" },
                { "date": "2024-12-16T00:00:00Z", "status": "Present" }
            ]
        }),
    );
    let result = result_ok(&resp);
    let months = result["monthlyAttendance"].as_array().expect("months");
    assert_eq!(months.len(), 12);

    let names: Vec<&str> = months.iter().map(|m| m["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
    );

    assert_eq!(months[0]["present"], json!(1));
    assert_eq!(months[0]["absent"], json!(1));
    // Late folds into the absent column of the monthly chart.
    assert_eq!(months[5]["absent"], json!(1));
    assert_eq!(months[3], json!({ "name": "Apr", "present": 0, "absent": 0 }));

    let bucketed: u64 = months
        .iter()
        .map(|m| m["present"].as_u64().unwrap() + m["absent"].as_u64().unwrap())
        .sum();
    assert_eq!(bucketed, result["attendanceCount"]["total"].as_u64().unwrap());
}

#[test]
fn unknown_status_counts_as_absent_everywhere() {
    let resp = call(
        "summary.get",
        json!({
            "attendance": [
                { "date": "2024-03-04T00:00:00Z", "status": "Sakit" },
                { "date": "2024-03-05T00:00:00Z", "status": "Present" }
            ]
        }),
    );
    let result = result_ok(&resp);
    assert_eq!(result["attendancePercentage"], json!(50.0));
    assert_eq!(result["attendanceCount"]["absent"], json!(1));
    assert_eq!(result["monthlyAttendance"][2]["absent"], json!(1));
}

#[test]
fn subject_averages_round_half_up_per_group() {
    let resp = call(
        "summary.get",
        json!({
            "grades": [
                { "title": "Quiz 1", "subject": "Math", "score": 80, "date": "2024-02-01T00:00:00Z" },
                { "title": "Quiz 2", "subject": "Math", "score": 90, "date": "2024-02-08T00:00:00Z" },
                { "title": "Quiz 3", "subject": "Math", "score": 84, "date": "2024-02-15T00:00:00Z" }
            ]
        }),
    );
    let averages = result_ok(&resp)["subjectAverages"].as_array().expect("averages").clone();
    assert_eq!(averages.len(), 1);
    // 254 / 3 = 84.67 rounds up to 85.
    assert_eq!(
        averages[0],
        json!({ "subject": "Math", "average": 85, "fullMark": 100 })
    );
}

#[test]
fn subject_groups_keep_first_appearance_order() {
    let resp = call(
        "summary.get",
        json!({
            "grades": [
                { "title": "W1", "subject": "Speaking", "score": 70, "date": "2024-02-01T00:00:00Z" },
                { "title": "W2", "subject": "Grammar", "score": 60, "date": "2024-02-02T00:00:00Z" },
                { "title": "W3", "subject": "Speaking", "score": 90, "date": "2024-02-03T00:00:00Z" }
            ]
        }),
    );
    let averages = result_ok(&resp)["subjectAverages"].as_array().expect("averages").clone();
    let subjects: Vec<&str> = averages.iter().map(|a| a["subject"].as_str().unwrap()).collect();
    assert_eq!(subjects, vec!["Speaking", "Grammar"]);
}

#[test]
fn missing_subject_defaults_to_general_at_decode_time() {
    let resp = call(
        "summary.get",
        json!({
            "grades": [
                { "title": "Quiz", "score": 75, "date": "2024-02-01T00:00:00Z" }
            ]
        }),
    );
    let averages = result_ok(&resp)["subjectAverages"].as_array().expect("averages").clone();
    assert_eq!(averages[0]["subject"], json!("General"));
}

#[test]
fn grades_list_and_chart_feed_the_dashboard_widgets() {
    let resp = call(
        "summary.get",
        json!({
            "grades": [
                { "title": "Midterm", "subject": "Grammar", "score": 88, "date": "2024-02-05T00:00:00Z" }
            ],
            "attendance": [
                { "date": "2024-02-05T00:00:00Z", "status": "Present" },
                { "date": "2024-02-06T00:00:00Z", "status": "Excused" }
            ]
        }),
    );
    let result = result_ok(&resp);

    assert_eq!(
        result["gradesList"][0],
        json!({ "title": "Midterm", "score": 88.0, "date": "05/02/2024" })
    );

    let chart = result["attendanceChart"].as_array().expect("chart");
    assert_eq!(chart.len(), 2);
    assert_eq!(chart[0]["name"], json!("Hadir"));
    assert_eq!(chart[0]["value"], json!(1));
    assert_eq!(chart[0]["color"], json!("#10B981"));
    assert_eq!(chart[1]["name"], json!("Absen/Sakit/Izin"));
    assert_eq!(chart[1]["value"], json!(1));
}
