diesel::table! {
    choices (id) {
        id -> Integer,
        question_id -> Integer,
        choice_text -> Text,
        votes -> Integer,
    }
}

diesel::table! {
    questions (id) {
        id -> Integer,
        question_text -> Text,
        pub_date -> TimestamptzSqlite,
    }
}

diesel::joinable!(choices -> questions (question_id));

diesel::allow_tables_to_appear_in_same_query!(choices, questions,);
