//! Diesel schema for issue persistence.

diesel::table! {
    /// Reported issues with their current status.
    issues (id) {
        /// Issue identifier.
        id -> Uuid,
        /// Short summary.
        title -> Text,
        /// Free-text description.
        description -> Text,
        /// Issue category.
        #[max_length = 32]
        category -> Varchar,
        /// Issue priority.
        #[max_length = 16]
        priority -> Varchar,
        /// Status of the latest timeline entry.
        #[max_length = 32]
        status -> Varchar,
        /// Free-text location.
        location -> Text,
        /// Owning department.
        #[max_length = 32]
        department -> Varchar,
        /// Reporter user identifier.
        reported_by -> Uuid,
        /// Reporter display name.
        #[max_length = 255]
        reporter_name -> Varchar,
        /// Optional image reference.
        image_url -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Timestamp of the latest timeline entry.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only status history, ordered by `sequence` within an issue.
    issue_timeline_entries (issue_id, sequence) {
        /// Parent issue identifier.
        issue_id -> Uuid,
        /// Zero-based position within the issue timeline.
        sequence -> Int4,
        /// Recorded status.
        #[max_length = 32]
        status -> Varchar,
        /// Explanatory note.
        note -> Text,
        /// Author user identifier.
        updated_by -> Uuid,
        /// Author display name.
        #[max_length = 255]
        updated_by_name -> Varchar,
        /// Entry timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(issue_timeline_entries -> issues (issue_id));
diesel::allow_tables_to_appear_in_same_query!(issues, issue_timeline_entries);
