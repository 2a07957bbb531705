//! The demo dataset the store is reset to.

#[derive(Debug, Clone, Copy)]
pub struct PostFixture {
    pub id: i64,
    pub username: &'static str,
    pub content: &'static str,
    pub created_at: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TagFixture {
    pub id: i64,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct PostTagFixture {
    pub post_id: i64,
    pub tag_id: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct PostLikeFixture {
    pub post_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct Fixtures {
    pub posts: &'static [PostFixture],
    pub tags: &'static [TagFixture],
    pub post_tags: &'static [PostTagFixture],
    pub post_likes: &'static [PostLikeFixture],
}

impl Fixtures {
    pub const fn demo() -> Self {
        Self {
            posts: POSTS,
            tags: TAGS,
            post_tags: POST_TAGS,
            post_likes: POST_LIKES,
        }
    }

    #[cfg(test)]
    pub const fn empty() -> Self {
        Self {
            posts: &[],
            tags: &[],
            post_tags: &[],
            post_likes: &[],
        }
    }
}

const TAGS: &[TagFixture] = &[
    TagFixture { id: 1, name: "anime" },
    TagFixture { id: 2, name: "reviews" },
    TagFixture { id: 3, name: "emotions" },
    TagFixture { id: 4, name: "upcoming" },
    TagFixture { id: 5, name: "AttackOnTitan" },
    TagFixture { id: 6, name: "recommendations" },
    TagFixture { id: 7, name: "manga" },
    TagFixture { id: 8, name: "DemonSlayer" },
    TagFixture { id: 9, name: "merch" },
    TagFixture { id: 10, name: "nostalgia" },
    TagFixture { id: 11, name: "characters" },
];

const POSTS: &[PostFixture] = &[
    PostFixture {
        id: 1,
        username: "Ellie",
        content: "Just finished watching the latest episode of my favorite anime! So intense!",
        created_at: "2024-09-24T14:30:00",
    },
    PostFixture {
        id: 2,
        username: "Max",
        content: "Can’t believe how much I cried during that last episode! #animefeels",
        created_at: "2024-09-24T15:00:00",
    },
    PostFixture {
        id: 3,
        username: "Sara",
        content: "Who else is excited for the new season coming out next month?",
        created_at: "2024-09-24T16:00:00",
    },
    PostFixture {
        id: 4,
        username: "Jake",
        content: "I finally started watching Attack on Titan! Why did I wait so long?!",
        created_at: "2024-09-24T16:30:00",
    },
    PostFixture {
        id: 5,
        username: "Nina",
        content: "I need recommendations for slice-of-life anime! What’s your favorite?",
        created_at: "2024-09-24T17:00:00",
    },
    PostFixture {
        id: 6,
        username: "Leo",
        content: "Just started reading the manga of my favorite series. It’s so good!",
        created_at: "2024-09-24T17:30:00",
    },
];

// Every post is tagged "anime" plus one topical tag.
const POST_TAGS: &[PostTagFixture] = &[
    PostTagFixture { post_id: 1, tag_id: 1 },
    PostTagFixture { post_id: 1, tag_id: 2 },
    PostTagFixture { post_id: 2, tag_id: 1 },
    PostTagFixture { post_id: 2, tag_id: 3 },
    PostTagFixture { post_id: 3, tag_id: 1 },
    PostTagFixture { post_id: 3, tag_id: 4 },
    PostTagFixture { post_id: 4, tag_id: 1 },
    PostTagFixture { post_id: 4, tag_id: 5 },
    PostTagFixture { post_id: 5, tag_id: 1 },
    PostTagFixture { post_id: 5, tag_id: 6 },
    PostTagFixture { post_id: 6, tag_id: 1 },
    PostTagFixture { post_id: 6, tag_id: 7 },
];

const POST_LIKES: &[PostLikeFixture] = &[
    PostLikeFixture { post_id: 1, user_id: 1 },
    PostLikeFixture { post_id: 1, user_id: 2 },
    PostLikeFixture { post_id: 1, user_id: 3 },
    PostLikeFixture { post_id: 2, user_id: 1 },
    PostLikeFixture { post_id: 2, user_id: 4 },
    PostLikeFixture { post_id: 3, user_id: 2 },
    PostLikeFixture { post_id: 3, user_id: 5 },
    PostLikeFixture { post_id: 4, user_id: 6 },
    PostLikeFixture { post_id: 4, user_id: 1 },
    PostLikeFixture { post_id: 5, user_id: 2 },
    PostLikeFixture { post_id: 5, user_id: 3 },
    PostLikeFixture { post_id: 6, user_id: 4 },
    PostLikeFixture { post_id: 6, user_id: 5 },
];
