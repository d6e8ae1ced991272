//! Table definitions for the warehouse star schema.
//!
//! Each table is a unit struct carrying its DDL through [`Relation`].
//! Statement text is assembled at compile time from the table-name
//! constants, so a renamed table propagates everywhere or nowhere.
//!
//! Distribution and sort hints follow the query profile: staging tables
//! distribute on the join column feeding the fact transform, the fact
//! table distributes on `song_id` and sorts on `start_time` for range
//! scans, and the small dimensions are fully replicated (`diststyle all`)
//! with their primary key as sort key. Redshift declares but does not
//! enforce the primary keys.
use jkh_redshift::*;

/// Landing table for raw event-log records, replaced wholesale each run.
pub struct StagingEvents;
/// Landing table for raw song-metadata records, replaced wholesale each run.
pub struct StagingSongs;
/// Fact table: one row per qualifying song play.
pub struct Songplays;
/// User dimension, keyed by `user_id`.
pub struct Users;
/// Song dimension, keyed by `song_id`.
pub struct Songs;
/// Artist dimension, keyed by `artist_id`.
pub struct Artists;
/// Time dimension: calendar breakdowns of each distinct `start_time`.
pub struct Time;

impl Relation for StagingEvents {
    fn name() -> &'static str {
        STAGING_EVENTS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            STAGING_EVENTS,
            " (
                artist        VARCHAR distkey,
                auth          VARCHAR,
                firstName     VARCHAR,
                gender        CHAR,
                itemInSession INTEGER,
                lastName      VARCHAR,
                length        NUMERIC,
                level         VARCHAR,
                location      VARCHAR,
                method        VARCHAR,
                page          VARCHAR,
                registration  NUMERIC,
                sessionId     INTEGER,
                song          VARCHAR,
                status        INTEGER,
                ts            BIGINT,
                userAgent     VARCHAR,
                userId        INTEGER
            );"
        )
    }
    fn drops() -> &'static str {
        const_format::concatcp!("DROP TABLE IF EXISTS ", STAGING_EVENTS, ";")
    }
}

impl Relation for StagingSongs {
    fn name() -> &'static str {
        STAGING_SONGS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            STAGING_SONGS,
            " (
                artist_id        VARCHAR,
                artist_latitude  NUMERIC,
                artist_longitude NUMERIC,
                artist_location  VARCHAR,
                artist_name      VARCHAR NOT NULL distkey,
                song_id          VARCHAR,
                title            VARCHAR NOT NULL,
                duration         NUMERIC,
                year             INTEGER
            );"
        )
    }
    fn drops() -> &'static str {
        const_format::concatcp!("DROP TABLE IF EXISTS ", STAGING_SONGS, ";")
    }
}

impl Relation for Songplays {
    fn name() -> &'static str {
        SONGPLAYS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            SONGPLAYS,
            " (
                songplay_id BIGINT IDENTITY(0, 1),
                start_time  TIMESTAMP NOT NULL,
                user_id     INTEGER NOT NULL,
                level       VARCHAR,
                song_id     VARCHAR distkey,
                artist_id   VARCHAR,
                session_id  INTEGER,
                location    VARCHAR,
                user_agent  VARCHAR,
                primary key(songplay_id)
            ) sortkey(start_time);"
        )
    }
    fn drops() -> &'static str {
        const_format::concatcp!("DROP TABLE IF EXISTS ", SONGPLAYS, ";")
    }
}

impl Relation for Users {
    fn name() -> &'static str {
        USERS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            USERS,
            " (
                user_id    INTEGER,
                first_name VARCHAR,
                last_name  VARCHAR,
                gender     CHAR,
                level      VARCHAR,
                primary key(user_id)
            ) diststyle all
            sortkey(user_id);"
        )
    }
    fn drops() -> &'static str {
        const_format::concatcp!("DROP TABLE IF EXISTS ", USERS, ";")
    }
}

impl Relation for Songs {
    fn name() -> &'static str {
        SONGS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            SONGS,
            " (
                song_id   VARCHAR,
                title     VARCHAR NOT NULL,
                artist_id VARCHAR,
                year      INTEGER,
                duration  NUMERIC,
                primary key(song_id)
            ) diststyle all
            sortkey(song_id);"
        )
    }
    fn drops() -> &'static str {
        const_format::concatcp!("DROP TABLE IF EXISTS ", SONGS, ";")
    }
}

impl Relation for Artists {
    fn name() -> &'static str {
        ARTISTS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            ARTISTS,
            " (
                artist_id VARCHAR,
                name      VARCHAR NOT NULL,
                location  VARCHAR,
                latitude  NUMERIC,
                longitude NUMERIC,
                primary key(artist_id)
            ) diststyle all
            sortkey(artist_id);"
        )
    }
    fn drops() -> &'static str {
        const_format::concatcp!("DROP TABLE IF EXISTS ", ARTISTS, ";")
    }
}

impl Relation for Time {
    fn name() -> &'static str {
        TIME
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            TIME,
            " (
                start_time TIMESTAMP WITHOUT TIME ZONE,
                hour       INTEGER,
                day        INTEGER,
                week       INTEGER,
                month      INTEGER,
                year       INTEGER,
                weekday    INTEGER,
                primary key(start_time)
            ) diststyle all
            sortkey(start_time);"
        )
    }
    fn drops() -> &'static str {
        const_format::concatcp!("DROP TABLE IF EXISTS ", TIME, ";")
    }
}
