diesel::table! {
    competitors (id) {
        id -> Text,
        team_name -> Text,
        score -> BigInt,
        photo -> Text,
        last_update -> Nullable<Text>,
    }
}
