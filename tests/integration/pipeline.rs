//! End-to-end: a deployment on disk answering questions.

use retort::{
    Answer, Chatbot, Config, ContextTracker, Corpus, EngineOptions, Lexicon, MemoryStorage,
    Normalizer, RankingEngine, Reply, Session, StorageAdapter, Transcript,
};

use crate::common::{assert_well_formed, deployment, sample_engine, Deployment};

fn chatbot(d: &Deployment) -> Chatbot<MemoryStorage> {
    let config = Config::load(&d.config).unwrap();
    let lexicon = Lexicon::from_files(&config.lexicon_paths()).unwrap();
    let stop_words = config.stop_words();
    let corpus = config.corpus.clone().unwrap();
    let store = MemoryStorage::from_path(&corpus, stop_words.clone(), config.search_limit).unwrap();
    let engine = RankingEngine::with_similarity(
        store,
        retort::EditSimilarity,
        stop_words,
        config.engine_options(false),
    );
    Chatbot::with_greetings(Normalizer::new(lexicon), engine, config.greetings())
}

#[test]
fn misspelled_question_with_custom_term_is_answered() {
    let d = deployment("");
    let reply = chatbot(&d).respond("how do i rset the gw");
    assert_eq!(
        reply,
        Reply::Answers(vec![Answer::new("Hold the reset button for ten seconds.", 1.0)])
    );
}

#[test]
fn configured_greetings_are_recognized() {
    let d = deployment("");
    let reply = chatbot(&d).respond("Moin");
    assert!(matches!(reply, Reply::Greeting(_)));
}

#[test]
fn unrelated_question_gets_no_answer() {
    let d = deployment("");
    assert_eq!(chatbot(&d).respond("bake sourdough bread"), Reply::Answers(vec![]));
}

#[test]
fn tops_limits_fuzzy_answers() {
    let d = deployment("tops: 3\n");
    let Reply::Answers(answers) = chatbot(&d).respond("does my gateway support resets") else {
        panic!("expected answers");
    };
    assert!(answers.len() >= 2);
    assert_well_formed(&answers, 3);
    assert_eq!(answers[0].confidence, 1.0);
}

#[test]
fn follow_up_question_uses_context() {
    let d = deployment("");
    let bot = chatbot(&d);
    let mut context = ContextTracker::new(["firmware"], 2);

    bot.respond_in(&mut context, "how do i update the firmware");
    let reply = bot.respond_in(&mut context, "how do i update it");
    assert_eq!(reply.best(), Some("Upload the image in the web interface."));
}

#[test]
fn exact_match_ranks_by_observation_count() {
    let answers = sample_engine(5).process("How do I reset the gateway?");
    assert_eq!(
        answers,
        vec![
            Answer::new("Hold the reset button for ten seconds.", 1.0),
            Answer::new("Power cycle it twice.", 0.5),
        ]
    );
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = sample_engine(2);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| engine.process("reset gateway")))
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    });
}

#[test]
fn verbose_mode_does_not_change_results() {
    let quiet = sample_engine(3).process("update gateway firmware");
    let loud = RankingEngine::new(
        crate::common::sample_store(),
        EngineOptions { tops: 3, verbose: true },
    )
    .process("update gateway firmware");
    assert_eq!(quiet, loud);
}

#[test]
fn saved_chat_becomes_a_trainable_corpus() {
    let d = deployment("");
    let config = Config::load(&d.config).unwrap();
    let bot = chatbot(&d);
    let context = ContextTracker::new(config.keywords(), config.context_memory);
    let mut session = Session::new(Some(context), Transcript::new(config.keywords()));

    session.ask(&bot, "hello");
    session.ask(&bot, "how do i updte the firmware");
    let path = session.save(&config.transcript_dir).unwrap().unwrap();
    assert!(path.starts_with(d.path("recent_chats")));
    assert!(session.context().unwrap().active().is_empty());

    let saved = Corpus::from_file(&path).unwrap();
    assert_eq!(saved.categories, vec!["firmware", "update"]);
    assert_eq!(
        saved.conversations,
        vec![vec![
            "how do i update the firmware".to_string(),
            "Upload the image in the web interface.".to_string(),
        ]]
    );

    let store = MemoryStorage::from_path(&config.transcript_dir, config.stop_words(), 10).unwrap();
    assert!(store.find("How do I update the firmware").is_some());
}
