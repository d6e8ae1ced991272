//! Staging-to-analytic transformations.
//!
//! Five INSERT..SELECT statements populate the star schema from the two
//! staging tables. Dimension loads are DISTINCT projections; nothing
//! deduplicates conflicting attribute values for the same natural key, so
//! duplicate declared primary keys can occur (Redshift does not enforce
//! them).
//!
//! The fact transform pairs events with song metadata by exact
//! (title, artist) match. It is an inner join: events with no matching
//! song row are excluded outright rather than inserted with null
//! song/artist references. Events without a user id never qualify.
use super::*;
use jkh_redshift::*;

impl Transform for Songplays {
    // e.ts is epoch milliseconds but is added as whole seconds here,
    // while the time transform below divides by 1000; carried over
    // unchanged from the source system
    fn inserts() -> &'static str {
        const_format::concatcp!(
            "INSERT INTO ",
            SONGPLAYS,
            " (start_time, user_id, level, song_id, artist_id, session_id, location, user_agent)
            SELECT timestamp 'epoch' + e.ts * interval '1 second' AS start_time,
                e.userId,
                e.level,
                s.song_id,
                s.artist_id,
                e.sessionId,
                e.location,
                e.userAgent
            FROM ",
            STAGING_SONGS,
            " s
            JOIN ",
            STAGING_EVENTS,
            " e
            ON s.title = e.song AND s.artist_name = e.artist
            WHERE e.userId IS NOT NULL;"
        )
    }
}

impl Transform for Users {
    // level is the subscription tier; a user who switched tiers yields
    // one DISTINCT row per tier observed, with no most-recent rule
    fn inserts() -> &'static str {
        const_format::concatcp!(
            "INSERT INTO ",
            USERS,
            " (user_id, first_name, last_name, gender, level)
            SELECT DISTINCT e.userId,
                e.firstName,
                e.lastName,
                e.gender,
                e.level
            FROM ",
            STAGING_EVENTS,
            " e
            WHERE e.userId IS NOT NULL;"
        )
    }
}

impl Transform for Songs {
    fn inserts() -> &'static str {
        const_format::concatcp!(
            "INSERT INTO ",
            SONGS,
            " (song_id, title, artist_id, year, duration)
            SELECT DISTINCT s.song_id,
                s.title,
                s.artist_id,
                s.year,
                s.duration
            FROM ",
            STAGING_SONGS,
            " s;"
        )
    }
}

impl Transform for Artists {
    fn inserts() -> &'static str {
        const_format::concatcp!(
            "INSERT INTO ",
            ARTISTS,
            " (artist_id, name, location, latitude, longitude)
            SELECT DISTINCT s.artist_id,
                s.artist_name,
                s.artist_location,
                s.artist_latitude,
                s.artist_longitude
            FROM ",
            STAGING_SONGS,
            " s;"
        )
    }
}

impl Transform for Time {
    // derived from every staged event, anonymous ones included — wider
    // than the songplays filter, carried over unchanged
    fn inserts() -> &'static str {
        const_format::concatcp!(
            "INSERT INTO ",
            TIME,
            " (start_time, hour, day, week, month, year, weekday)
            SELECT DISTINCT ts,
                EXTRACT(HOUR FROM ts),
                EXTRACT(DAY FROM ts),
                EXTRACT(WEEK FROM ts),
                EXTRACT(MONTH FROM ts),
                EXTRACT(YEAR FROM ts),
                EXTRACT(WEEKDAY FROM ts)
            FROM (SELECT (timestamp 'epoch' + ts / 1000 * interval '1 second') AS ts FROM ",
            STAGING_EVENTS,
            ");"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn songplays_filters_anonymous_events() {
        assert!(Songplays::inserts().contains("WHERE e.userId IS NOT NULL"));
    }

    #[test]
    fn songplays_joins_on_title_and_artist() {
        let sql = Songplays::inserts();
        assert!(sql.contains("ON s.title = e.song AND s.artist_name = e.artist"));
        // inner join: unmatched events are excluded, not nulled
        assert!(!sql.contains("LEFT"));
        assert!(!sql.contains("OUTER"));
    }

    #[test]
    fn users_filters_anonymous_events() {
        assert!(Users::inserts().contains("WHERE e.userId IS NOT NULL"));
    }

    #[test]
    fn time_ingests_every_event() {
        assert!(!Time::inserts().contains("userId"));
    }

    #[test]
    fn time_scales_millis_to_seconds() {
        assert!(Time::inserts().contains("ts / 1000"));
        assert!(!Songplays::inserts().contains("/ 1000"));
    }

    #[test]
    fn dimensions_project_distinct_rows() {
        assert!(Users::inserts().contains("SELECT DISTINCT"));
        assert!(Songs::inserts().contains("SELECT DISTINCT"));
        assert!(Artists::inserts().contains("SELECT DISTINCT"));
        assert!(Time::inserts().contains("SELECT DISTINCT"));
    }
}
