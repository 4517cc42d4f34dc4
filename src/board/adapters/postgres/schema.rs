//! Diesel schema for board record queries.

diesel::table! {
    /// Task owners (users) as read by the scheduled jobs.
    owners (id) {
        /// Owner identifier.
        id -> Uuid,
        /// Owner email address.
        #[max_length = 255]
        email -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Projects grouping tasks and columns under one owner.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Project name.
        #[max_length = 255]
        name -> Varchar,
        /// Owning user.
        owner_id -> Uuid,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Task records with deadlines and completion tracking.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-text body.
        content -> Nullable<Text>,
        /// Deadline instant.
        deadline -> Timestamptz,
        /// Urgency level.
        #[max_length = 20]
        priority -> Varchar,
        /// Lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Finish instant, set only while the task is done.
        finished_at -> Nullable<Timestamptz>,
        /// Owning project.
        project_id -> Uuid,
        /// Current column.
        column_id -> Uuid,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(projects -> owners (owner_id));
diesel::joinable!(tasks -> projects (project_id));

diesel::allow_tables_to_appear_in_same_query!(owners, projects, tasks);
