//! Every link table, seen from each of its two sides. The constant name
//! reads owner first: `ARTICLE_RESEARCH_LINE.add(pool, article_id, line_id, ..)`.

use super::association::{Association, GuardedRow, PrimaryGuard};

pub(crate) const ARTICLE_RESEARCH_LINE: Association = Association::new(
    "research_line_article",
    "article",
    "research_line",
    "this research line has already been added",
);

pub(crate) const RESEARCH_LINE_ARTICLE: Association = Association::new(
    "research_line_article",
    "research_line",
    "article",
    "this article has already been added",
);

pub(crate) const FINANCED_PROJECT_FUNDING_BODY: Association = Association::new(
    "funding_body_financed_project",
    "financed_project",
    "funding_body",
    "this funding body has already been added",
)
.recorded()
.guarded(PrimaryGuard {
    table: "financed_project",
    column: "primary_funding_body",
    row: GuardedRow::Owner,
    reason: "this funding body is already the primary",
});

pub(crate) const FUNDING_BODY_FINANCED_PROJECT: Association = Association::new(
    "funding_body_financed_project",
    "funding_body",
    "financed_project",
    "this financed project has already been added",
)
.recorded()
.guarded(PrimaryGuard {
    table: "financed_project",
    column: "primary_funding_body",
    row: GuardedRow::Target,
    reason: "this financed project has this funding body as primary",
});

pub(crate) const FINANCED_PROJECT_LEADER: Association = Association::new(
    "financed_project_leader",
    "financed_project",
    "member",
    "this leader has already been added",
)
.field("leader")
.relation("financed_project_as_leader")
.guarded(PrimaryGuard {
    table: "financed_project",
    column: "primary_leader",
    row: GuardedRow::Owner,
    reason: "this leader is already the primary",
});

pub(crate) const MEMBER_FINANCED_PROJECT_AS_LEADER: Association = Association::new(
    "financed_project_leader",
    "member",
    "financed_project",
    "this financed project has already been added",
)
.relation("member_as_leader")
.guarded(PrimaryGuard {
    table: "financed_project",
    column: "primary_leader",
    row: GuardedRow::Target,
    reason: "this financed project has this member as primary leader",
});

pub(crate) const FINANCED_PROJECT_MEMBER: Association = Association::new(
    "financed_project_member",
    "financed_project",
    "member",
    "this member has already been added",
);

pub(crate) const MEMBER_FINANCED_PROJECT: Association = Association::new(
    "financed_project_member",
    "member",
    "financed_project",
    "this financed project has already been added",
);

pub(crate) const FINANCED_PROJECT_RESEARCH_LINE: Association = Association::new(
    "research_line_financed_project",
    "financed_project",
    "research_line",
    "this research line has already been added",
);

pub(crate) const RESEARCH_LINE_FINANCED_PROJECT: Association = Association::new(
    "research_line_financed_project",
    "research_line",
    "financed_project",
    "this financed project has already been added",
);

pub(crate) const MEMBER_STATUS: Association = Association::new(
    "member_status",
    "member",
    "status",
    "this status has already been added",
)
.guarded(PrimaryGuard {
    table: "member",
    column: "primary_status",
    row: GuardedRow::Owner,
    reason: "this status is already the primary",
});

pub(crate) const STATUS_MEMBER: Association = Association::new(
    "member_status",
    "status",
    "member",
    "this member has already been added",
)
.guarded(PrimaryGuard {
    table: "member",
    column: "primary_status",
    row: GuardedRow::Target,
    reason: "this member has this status as primary",
});

pub(crate) const MEMBER_PARTNER: Association = Association::new(
    "partner_member",
    "member",
    "partner",
    "this partner has already been added",
);

pub(crate) const PARTNER_MEMBER: Association = Association::new(
    "partner_member",
    "partner",
    "member",
    "this member has already been added",
);

pub(crate) const MEMBER_RESEARCH_LINE: Association = Association::new(
    "research_line_member",
    "member",
    "research_line",
    "this research line has already been added",
);

pub(crate) const RESEARCH_LINE_MEMBER: Association = Association::new(
    "research_line_member",
    "research_line",
    "member",
    "this member has already been added",
);

pub(crate) const PARTNER_RESEARCH_LINE: Association = Association::new(
    "research_line_partner",
    "partner",
    "research_line",
    "this research line has already been added",
);

pub(crate) const RESEARCH_LINE_PARTNER: Association = Association::new(
    "research_line_partner",
    "research_line",
    "partner",
    "this partner has already been added",
);

pub(crate) const RESEARCH_AREA_RESEARCH_LINE: Association = Association::new(
    "research_area_research_line",
    "research_area",
    "research_line",
    "this research line has already been added",
)
.guarded(PrimaryGuard {
    table: "research_line",
    column: "primary_research_area",
    row: GuardedRow::Target,
    reason: "this research line has this research area as primary",
});

pub(crate) const RESEARCH_LINE_RESEARCH_AREA: Association = Association::new(
    "research_area_research_line",
    "research_line",
    "research_area",
    "this research area has already been added",
)
.guarded(PrimaryGuard {
    table: "research_line",
    column: "primary_research_area",
    row: GuardedRow::Owner,
    reason: "this research area is already the primary",
});

pub(crate) const MEMBER_PUBLICATION: Association = Association::new(
    "member_publication",
    "member",
    "publication",
    "this publication has already been added",
);

/// Co-authors. The primary author is not guarded: a member may be listed
/// both as primary author and among the linked authors.
pub(crate) const PUBLICATION_MEMBER: Association = Association::new(
    "member_publication",
    "publication",
    "member",
    "this member has already been added",
);

pub(crate) const PUBLICATION_RESEARCH_LINE: Association = Association::new(
    "research_line_publication",
    "publication",
    "research_line",
    "this research line has already been added",
);

pub(crate) const RESEARCH_LINE_PUBLICATION: Association = Association::new(
    "research_line_publication",
    "research_line",
    "publication",
    "this publication has already been added",
);

pub(crate) const STUDENT_WORK_RESEARCH_LINE: Association = Association::new(
    "research_line_student_work",
    "student_work",
    "research_line",
    "this research line has already been added",
);

pub(crate) const RESEARCH_LINE_STUDENT_WORK: Association = Association::new(
    "research_line_student_work",
    "research_line",
    "student_work",
    "this student work has already been added",
);

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[Association] = &[
        ARTICLE_RESEARCH_LINE,
        RESEARCH_LINE_ARTICLE,
        FINANCED_PROJECT_FUNDING_BODY,
        FUNDING_BODY_FINANCED_PROJECT,
        FINANCED_PROJECT_LEADER,
        MEMBER_FINANCED_PROJECT_AS_LEADER,
        FINANCED_PROJECT_MEMBER,
        MEMBER_FINANCED_PROJECT,
        FINANCED_PROJECT_RESEARCH_LINE,
        RESEARCH_LINE_FINANCED_PROJECT,
        MEMBER_STATUS,
        STATUS_MEMBER,
        MEMBER_PARTNER,
        PARTNER_MEMBER,
        MEMBER_RESEARCH_LINE,
        RESEARCH_LINE_MEMBER,
        PARTNER_RESEARCH_LINE,
        RESEARCH_LINE_PARTNER,
        RESEARCH_AREA_RESEARCH_LINE,
        RESEARCH_LINE_RESEARCH_AREA,
        MEMBER_PUBLICATION,
        PUBLICATION_MEMBER,
        PUBLICATION_RESEARCH_LINE,
        RESEARCH_LINE_PUBLICATION,
        STUDENT_WORK_RESEARCH_LINE,
        RESEARCH_LINE_STUDENT_WORK,
    ];

    #[test]
    fn every_table_is_described_from_both_sides() {
        for link in ALL {
            let mirrored = ALL
                .iter()
                .filter(|other| other.table == link.table)
                .find(|other| {
                    other.owner_column == link.target_column
                        && other.target_column == link.owner_column
                });
            assert!(mirrored.is_some(), "{} has no mirror", link.table);
        }
    }

    #[test]
    fn duplicate_messages_follow_one_pattern() {
        for link in ALL {
            assert!(link.duplicate_reason.starts_with("this "), "{}", link.table);
            assert!(link.duplicate_reason.ends_with(" has already been added"), "{}", link.table);
        }
    }

    #[test]
    fn guards_point_at_the_row_holding_the_primary() {
        let guard = STATUS_MEMBER.primary_guard.expect("guarded");
        assert_eq!(guard.table, "member");
        assert_eq!(guard.row, GuardedRow::Target);
        assert_eq!(MEMBER_STATUS.field, "status");
        assert_eq!(FINANCED_PROJECT_LEADER.field, "leader");
        assert!(FUNDING_BODY_FINANCED_PROJECT.recorded);
        assert!(ARTICLE_RESEARCH_LINE.primary_guard.is_none());
    }

    #[test]
    fn publication_links_list_by_the_owner_side() {
        assert_eq!(PUBLICATION_MEMBER.relation, "publication");
        assert_eq!(PUBLICATION_MEMBER.target_table, "member");
        assert!(PUBLICATION_MEMBER.primary_guard.is_none());
        assert_eq!(RESEARCH_LINE_STUDENT_WORK.field, "student_work");
        assert_eq!(
            RESEARCH_LINE_STUDENT_WORK.duplicate_reason,
            "this student work has already been added"
        );
    }
}
