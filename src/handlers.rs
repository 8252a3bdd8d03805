use crate::errors::AppError;
use crate::models::{ClickRequest, SparkResponse, SparkState, UserKey, UserView};
use crate::spark::{flame_level, record_click, reset_keeping_record, rollover_if_new_day};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use chrono::Local;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let now = Local::now();
    let mut spark = state.spark.lock().await;
    rollover_if_new_day(&mut spark, now.date_naive());
    Html(render_index(&to_response(&spark)))
}

pub async fn get_spark(State(state): State<AppState>) -> Json<SparkResponse> {
    let now = Local::now();
    let mut spark = state.spark.lock().await;
    rollover_if_new_day(&mut spark, now.date_naive());
    Json(to_response(&spark))
}

pub async fn click(
    State(state): State<AppState>,
    Json(payload): Json<ClickRequest>,
) -> Result<Json<SparkResponse>, AppError> {
    let key = UserKey::parse(payload.user.trim())
        .ok_or_else(|| AppError::bad_request("user must be 'user1' or 'user2'"))?;

    Ok(Json(apply_click(&state, key).await))
}

pub async fn click_user1(State(state): State<AppState>) -> Redirect {
    apply_click(&state, UserKey::User1).await;
    Redirect::to("/")
}

pub async fn click_user2(State(state): State<AppState>) -> Redirect {
    apply_click(&state, UserKey::User2).await;
    Redirect::to("/")
}

pub async fn reset(State(state): State<AppState>) -> Json<SparkResponse> {
    Json(apply_reset(&state).await)
}

pub async fn reset_form(State(state): State<AppState>) -> Redirect {
    apply_reset(&state).await;
    Redirect::to("/")
}

async fn apply_click(state: &AppState, key: UserKey) -> SparkResponse {
    let now = Local::now();
    let mut spark = state.spark.lock().await;
    rollover_if_new_day(&mut spark, now.date_naive());

    let sparks_before = spark.spark_count;
    record_click(&mut spark, key, now);
    if spark.spark_count > sparks_before {
        info!(
            spark_count = spark.spark_count,
            current_streak = spark.current_streak,
            "both users clicked today, spark ignited"
        );
    }

    to_response(&spark)
}

async fn apply_reset(state: &AppState) -> SparkResponse {
    let now = Local::now();
    let mut spark = state.spark.lock().await;
    *spark = reset_keeping_record(&spark, now);
    info!(longest_streak = spark.longest_streak, "spark reset, record kept");
    to_response(&spark)
}

fn to_response(spark: &SparkState) -> SparkResponse {
    SparkResponse {
        date: spark.last_checked_date.to_string(),
        users: spark
            .users
            .iter()
            .map(|user| UserView {
                name: user.name.clone(),
                clicked_today: user.clicked_today,
                last_click: user.last_click.map(|at| at.to_rfc3339()),
            })
            .collect(),
        spark_count: spark.spark_count,
        current_streak: spark.current_streak,
        longest_streak: spark.longest_streak,
        flame_level: flame_level(spark.current_streak),
        both_clicked_today: spark.both_clicked_today(),
        started_at: spark.started_at.to_rfc3339(),
    }
}
