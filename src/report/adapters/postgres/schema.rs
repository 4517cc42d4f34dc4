//! Diesel schema for report persistence.

diesel::table! {
    /// Per-owner period reports, written once per scheduled run.
    reports (id) {
        /// Report identifier.
        id -> Uuid,
        /// Owning user.
        owner_id -> Uuid,
        /// Report kind code (1 = weekly, 2 = monthly).
        kind -> Int2,
        /// Period start instant (inclusive).
        period_start -> Timestamptz,
        /// Period end instant (exclusive).
        period_end -> Timestamptz,
        /// Distinct tasks relevant to the period.
        total_tasks -> Int8,
        /// Tasks with done status.
        completed_tasks -> Int8,
        /// Tasks with doing status.
        pending_tasks -> Int8,
        /// Tasks whose deadline fell in the period while overdue.
        overdue_tasks -> Int8,
        /// Average completion time in hundredths of an hour.
        average_completion_centihours -> Int8,
        /// Weekly analysis payload; null for monthly reports.
        weekly_analysis -> Nullable<Jsonb>,
        /// Monthly analysis payload; null for weekly reports.
        monthly_analysis -> Nullable<Jsonb>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
